use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::InvoiceLogic;
use crate::core::billing::InvoiceSummary;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::{format_amount, format_percent};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary = cmd {
        let outcome = InvoiceLogic::run(cfg)?;
        super::report_rejected(&outcome);

        if outcome.tree.is_empty() {
            warning("No project months found.");
            return Ok(());
        }

        header(format!(
            "Project months (contractor multiplier {})",
            format_percent(outcome.contractor_multiplier)
        ));

        let mut table = Table::new(vec![
            Column::left("Client"),
            Column::left("Month"),
            Column::left("Main"),
            Column::left("Sub"),
            Column::left("People"),
            Column::right("Hours"),
            Column::right("Expenses"),
            Column::right("Total"),
        ]);

        for pm in outcome.tree.project_months() {
            let inv = InvoiceSummary::compute(pm, outcome.contractor_multiplier, cfg.payment_terms_days);
            let people: Vec<&str> = pm.people().map(|p| p.name.as_str()).collect();

            table.add_row(vec![
                pm.identity.client.clone(),
                pm.identity.month_label.clone(),
                pm.identity.main_abbr.clone(),
                pm.identity.sub_abbr.clone(),
                people.join(", "),
                format_amount(pm.total_hours()),
                format_amount(pm.expenses),
                format!("{}{}", cfg.currency_symbol, format_amount(inv.total)),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
