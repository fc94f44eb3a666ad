use crate::{style, widget};

use data::pnl::{MissingInput, ProfitAndLoss};

use iced::{
    Element,
    widget::{button, column, text},
};

#[derive(Debug, Clone)]
pub enum Message {
    EntryChanged(String),
    ExitChanged(String),
    QuantityChanged(String),
    Calculate,
}

/// ماشین‌حساب سود و زیان
#[derive(Default)]
pub struct PnlPanel {
    entry: String,
    exit: String,
    quantity: String,
    result: Option<Result<ProfitAndLoss, MissingInput>>, // آخرین محاسبه
}

impl PnlPanel {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::EntryChanged(entry) => self.entry = entry,
            Message::ExitChanged(exit) => self.exit = exit,
            Message::QuantityChanged(quantity) => self.quantity = quantity,
            Message::Calculate => {
                self.result = Some(ProfitAndLoss::from_inputs(
                    &self.entry,
                    &self.exit,
                    &self.quantity,
                ));
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut content = column![
            widget::labeled_input(
                "Entry",
                "0.00",
                &self.entry,
                true,
                Message::EntryChanged,
                Some(Message::Calculate),
            ),
            widget::labeled_input(
                "Exit",
                "0.00",
                &self.exit,
                true,
                Message::ExitChanged,
                Some(Message::Calculate),
            ),
            widget::labeled_input(
                "Qty",
                "1",
                &self.quantity,
                true,
                Message::QuantityChanged,
                Some(Message::Calculate),
            ),
            button(text("Calculate"))
                .style(|theme, status| style::button::confirm(theme, status, true))
                .on_press(Message::Calculate),
        ]
        .spacing(8);

        if let Some(result) = &self.result {
            let (message, is_error) = match result {
                Ok(pnl) => (pnl.to_string(), pnl.profit < 0.0),
                Err(err) => (err.to_string(), true),
            };
            content = content.push(
                text(message)
                    .size(12)
                    .style(move |theme| style::feedback_text(theme, is_error)),
            );
        }

        widget::section("P&L Calculator", content)
    }
}
