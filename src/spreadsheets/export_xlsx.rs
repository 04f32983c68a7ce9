use crate::catalog::Lead;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

/// Every lead of the current filtered, sorted sequence (not just the
/// visible page), one row each.
pub fn export_leads_xlsx(leads: &[&Lead]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        "ID",
        "Город",
        "Тип сделки",
        "Тип объекта",
        "Комнаты",
        "Бюджет от, ₽",
        "Бюджет до, ₽",
        "Бюджет",
        "Совпадение, %",
        "Эксклюзив",
        "Источник",
        "Контакт",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, lead) in leads.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &lead.id)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write id: {}", e)))?;

        worksheet
            .write_string(r, 1, &lead.city)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write city: {}", e)))?;

        worksheet
            .write_string(r, 2, lead.deal_type.label())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write deal type: {}", e)))?;

        worksheet
            .write_string(r, 3, lead.property_type.label())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write property type: {}", e)))?;

        worksheet
            .write_string(r, 4, lead.rooms.to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write rooms: {}", e)))?;

        // Missing bounds stay blank rather than 0.
        if let Some(from) = lead.budget_from {
            worksheet
                .write_number(r, 5, from as f64)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write budget from: {}", e)))?;
        }

        if let Some(to) = lead.budget_to {
            worksheet
                .write_number(r, 6, to as f64)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write budget to: {}", e)))?;
        }

        let budget = lead.display_budget().unwrap_or_default();
        worksheet
            .write_string(r, 7, &budget)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write budget: {}", e)))?;

        worksheet
            .write_number(r, 8, lead.match_percent as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write match: {}", e)))?;

        worksheet
            .write_string(r, 9, if lead.exclusive { "Да" } else { "Нет" })
            .map_err(|e| ServerError::XlsxError(format!("Failed to write exclusive: {}", e)))?;

        worksheet
            .write_string(r, 10, &lead.source)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write source: {}", e)))?;

        worksheet
            .write_string(r, 11, &lead.contact.name)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write contact: {}", e)))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    xlsx_response(buffer, "leads.xlsx")
}
