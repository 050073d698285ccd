// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{DAILY_HEADERS, DailyRecord, SUMMARY_HEADERS, record_to_row, summarize};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

pub const DAILY_SHEET: &str = "Daily Records";
pub const SUMMARY_SHEET: &str = "Summary";

const SUMMARY_TYPE_WIDTH: f64 = 20.0;
const SUMMARY_COUNT_WIDTH: f64 = 10.0;

/// Build the two-sheet workbook in memory.
pub(crate) fn build_workbook(records: &[DailyRecord]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let daily = workbook.add_worksheet();
    daily.set_name(DAILY_SHEET)?;
    write_daily(daily, records)?;

    let summary = workbook.add_worksheet();
    summary.set_name(SUMMARY_SHEET)?;
    write_summary(summary, records)?;

    Ok(workbook.save_to_buffer()?)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn band_format(row_index: usize) -> Format {
    let band = if row_index % 2 == 0 {
        Color::RGB(0xEAF3FB)
    } else {
        Color::RGB(0xFFFFFF)
    };
    Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Daily rows with column widths sized to the widest cell.
fn write_daily(worksheet: &mut Worksheet, records: &[DailyRecord]) -> AppResult<()> {
    let header = header_format();

    for (col, h) in DAILY_HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *h, &header)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = DAILY_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let fmt = band_format(row_index);

        for (col, value) in record_to_row(rec).iter().enumerate() {
            worksheet.write_with_format(row, col as u16, *value, &fmt)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(*value));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }
    Ok(())
}

fn write_summary(worksheet: &mut Worksheet, records: &[DailyRecord]) -> AppResult<()> {
    let header = header_format();

    for (col, h) in SUMMARY_HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *h, &header)?;
    }

    for (row_index, (name, count)) in summarize(records).iter().enumerate() {
        let row = (row_index + 1) as u32;
        let fmt = band_format(row_index);
        let num_fmt = band_format(row_index).set_align(FormatAlign::Right);

        worksheet.write_with_format(row, 0, name.as_str(), &fmt)?;
        worksheet.write_with_format(row, 1, *count, &num_fmt)?;
    }

    worksheet.set_column_width(0, SUMMARY_TYPE_WIDTH)?;
    worksheet.set_column_width(1, SUMMARY_COUNT_WIDTH)?;
    Ok(())
}
