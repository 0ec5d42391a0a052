use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::{debug, info};

use pos_core::models::{OrderReport, PaymentMethod};
use pos_core::money::format_php;
use pos_core::repository::{
    MenuRepository, OrderRepository, PaymentRepository, ReportRepository,
};

use crate::input::{self, prompt_cash, prompt_choice, prompt_until};
use crate::{report, SessionError};

/// Outcome of one full counter session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// No lines were entered; payment and reporting were skipped
    EmptyOrder { order_id: i64 },
    Completed { order_id: i64, total: i64 },
}

/// Drives the order lifecycle: open order → take items → total →
/// pay → report. Strictly sequential; the only backward branches are
/// the item loop and the input retries.
pub struct SessionController {
    menu: Arc<dyn MenuRepository>,
    orders: Arc<dyn OrderRepository>,
    payments: Arc<dyn PaymentRepository>,
    reports: Arc<dyn ReportRepository>,
}

impl SessionController {
    pub fn new(
        menu: Arc<dyn MenuRepository>,
        orders: Arc<dyn OrderRepository>,
        payments: Arc<dyn PaymentRepository>,
        reports: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            menu,
            orders,
            payments,
            reports,
        }
    }

    /// Run one session over the given console streams
    pub async fn run<R, W>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionOutcome, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        let order_id = self.orders.create_order().await?;
        debug!(order_id, "opened order");

        self.take_items(input, output, order_id).await?;

        let total = self.orders.total_lines(order_id).await?;
        self.orders.set_total(order_id, total).await?;

        if total <= 0 {
            writeln!(output, "\nOrder is empty. Payment cannot be processed.")?;
            info!(order_id, "session ended with empty order");
            return Ok(SessionOutcome::EmptyOrder { order_id });
        }

        writeln!(output, "\nTotal Bill: PHP {}", format_php(total))?;
        self.take_payment(input, output, order_id, total).await?;
        self.print_reports(output, order_id).await?;

        info!(order_id, total, "session completed");
        Ok(SessionOutcome::Completed { order_id, total })
    }

    async fn take_items<R, W>(
        &self,
        input: &mut R,
        output: &mut W,
        order_id: i64,
    ) -> Result<(), SessionError>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            self.display_menu(output).await?;
            let choice = prompt_until(
                input,
                output,
                "Enter item number (0 to finish): ",
                input::RETRY_INPUT,
                input::parse_i64,
            )?;
            if choice == 0 {
                break;
            }

            let quantity = prompt_until(
                input,
                output,
                "Enter quantity: ",
                input::RETRY_INPUT,
                input::parse_positive,
            )?;

            // An unknown menu id inserts nothing and prints nothing.
            if let Some(item) = self.menu.find_item(choice).await? {
                let mut quantity = quantity;
                // Re-prompt when the subtotal would overflow.
                let subtotal = loop {
                    match item.price.checked_mul(quantity) {
                        Some(subtotal) => break subtotal,
                        None => {
                            quantity = prompt_until(
                                input,
                                output,
                                input::RETRY_INPUT,
                                input::RETRY_INPUT,
                                input::parse_positive,
                            )?;
                        }
                    }
                };
                self.orders
                    .add_line(order_id, item.id, quantity, subtotal)
                    .await?;
                debug!(order_id, menu_id = item.id, quantity, subtotal, "line added");
            }
        }
        Ok(())
    }

    async fn display_menu<W: Write>(&self, output: &mut W) -> Result<(), SessionError> {
        writeln!(output, "\nMenu:")?;
        for item in self.menu.list_items().await? {
            writeln!(
                output,
                "{}. {} - PHP {}",
                item.id,
                item.name,
                format_php(item.price)
            )?;
        }
        Ok(())
    }

    async fn take_payment<R, W>(
        &self,
        input: &mut R,
        output: &mut W,
        order_id: i64,
        total: i64,
    ) -> Result<(), SessionError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "\n1. Cash\n2. GCash\n3. Credit/Debit Card")?;
        let code = prompt_choice(input, output, "Select Payment Method (1-3): ", 1, 3)?;
        let method =
            PaymentMethod::try_from(code).map_err(|e| SessionError::Store(Box::new(e)))?;

        let (amount_paid, change) = if method == PaymentMethod::Cash {
            let paid = prompt_cash(input, output, "\nEnter cash amount paid: PHP ", total)?;
            let change = paid - total;
            writeln!(output, "Change: PHP {}", format_php(change))?;
            (paid, change)
        } else {
            writeln!(output, "Payment successful.")?;
            (total, 0)
        };

        self.payments
            .record_payment(order_id, method, amount_paid, change)
            .await?;
        debug!(order_id, method = method.label(), amount_paid, change, "payment recorded");
        Ok(())
    }

    async fn print_reports<W: Write>(
        &self,
        output: &mut W,
        order_id: i64,
    ) -> Result<(), SessionError> {
        let views = OrderReport {
            lines: self.reports.order_lines(order_id).await?,
            groups: self.reports.grouped_lines(order_id).await?,
            order: self.reports.order_summary(order_id).await?,
            items: self.reports.ordered_items(order_id).await?,
            payments: self.reports.payments(order_id).await?,
        };
        report::render(output, &views)?;
        Ok(())
    }
}
