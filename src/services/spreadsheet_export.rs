//! Exportação de relatórios para planilha (.xlsx)

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::services::report_service::{ReportRow, REPORT_HEADERS};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Planilha pronta para download
#[derive(Debug, Clone)]
pub struct SpreadsheetFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Monta uma pasta de trabalho com uma aba: cabeçalho + uma linha por destino
pub fn build_workbook(sheet_name: &str, rows: &[ReportRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let r = (index + 1) as u32;
        worksheet.write_string(r, 0, row.date.as_str())?;
        worksheet.write_number(r, 1, row.sequence)?;
        worksheet.write_string(r, 2, row.vehicle_plate.as_str())?;
        worksheet.write_string(r, 3, row.driver_name.as_str())?;
        worksheet.write_string(r, 4, row.departure_city.as_str())?;
        worksheet.write_string(r, 5, row.departure_time.as_str())?;
        worksheet.write_string(r, 6, row.destination_city.as_str())?;
        worksheet.write_string(r, 7, row.destination_time.as_str())?;
        worksheet.write_string(r, 8, row.observation.as_str())?;
        worksheet.write_number(r, 9, row.destination_order as u32)?;
        worksheet.write_number(r, 10, row.route_order as u32)?;
    }

    workbook.save_to_buffer()
}
