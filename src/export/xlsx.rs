// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{entry_to_row, get_headers};
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, ExcelDateTime, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_COL: usize = 2;
const FLAG_COLS: [usize; 3] = [4, 5, 6];

/// XLSX export with a styled header, banded rows and fitted column widths.
pub(crate) fn export_xlsx(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Tracking").map_err(to_app_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    for (row_index, entry) in entries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 {
            Color::RGB(0xEAF3FB)
        } else {
            Color::RGB(0xFFFFFF)
        };

        for (col, value) in entry_to_row(entry).iter().enumerate() {
            write_cell(worksheet, row, col, value, band)?;
            col_widths[col] = col_widths[col].max(value.width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(ws: &mut Worksheet, row: u32, col: usize, s: &str, band: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let c = col as u16;

    if col == DATE_COL
        && let Ok(dt) = ExcelDateTime::parse_from_str(s)
    {
        let fmt = base.set_num_format("yyyy-mm-dd");
        ws.write_with_format(row, c, &dt, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    if (col == 0 || FLAG_COLS.contains(&col))
        && let Ok(n) = s.parse::<f64>()
    {
        let fmt = base.set_align(FormatAlign::Right);
        ws.write_with_format(row, c, n, &fmt).map_err(to_app_error)?;
        return Ok(());
    }

    ws.write_with_format(row, c, s, &base)
        .map_err(to_app_error)?;
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
