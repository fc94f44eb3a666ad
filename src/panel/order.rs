use crate::{style, widget};

use data::Session;
use data::order::{Draft, OrderError, OrderKind, Side};
use exchange::Ticker;

use iced::{
    Element,
    widget::{button, column, text},
};

/// پیام‌های فرم سفارش
#[derive(Debug, Clone)]
pub enum Message {
    SideSelected(Side),
    KindSelected(OrderKind),
    SymbolChanged(String),
    QuantityChanged(String),
    PriceChanged(String),
    TriggerChanged(String),
    Submit,
}

/// آخرین نتیجه‌ی ثبت فرم
#[derive(Debug, Clone, PartialEq)]
enum Feedback {
    Rejected(OrderError), // خطای اعتبارسنجی؛ ورودی‌ها حفظ می‌شوند
    Submitted(String),    // متن تایید سفارش
}

/// وضعیت فرم سفارش شبیه‌سازی شده
pub struct OrderPanel {
    draft: Draft,
    feedback: Option<Feedback>,
}

impl OrderPanel {
    pub fn new(active: &Ticker) -> Self {
        Self {
            draft: Draft::new(active),
            feedback: None,
        }
    }

    /// نماد فرم همیشه نماد فعال نمودار را دنبال می‌کند
    pub fn sync_symbol(&mut self, active: &Ticker) {
        self.draft.symbol = active.to_string();
    }

    pub fn update(&mut self, message: Message, session: &Session) {
        match message {
            Message::SideSelected(side) => self.draft.side = side,
            Message::KindSelected(kind) => self.draft.kind = kind,
            Message::SymbolChanged(symbol) => self.draft.symbol = symbol,
            Message::QuantityChanged(quantity) => self.draft.quantity = quantity,
            Message::PriceChanged(price) => self.draft.price = price,
            Message::TriggerChanged(trigger) => self.draft.trigger = trigger,
            Message::Submit => match self.draft.validate() {
                Ok(order) => {
                    let confirmation = order.confirmation(session.market_price(&order.ticker));
                    log::info!("{confirmation}");

                    self.draft.reset(session.ticker());
                    self.feedback = Some(Feedback::Submitted(confirmation));
                }
                Err(err) => {
                    log::debug!("Order rejected: {err}");
                    self.feedback = Some(Feedback::Rejected(err));
                }
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let draft = &self.draft;
        let rejected = match &self.feedback {
            Some(Feedback::Rejected(err)) => Some(*err),
            _ => None,
        };

        let mut form = column![
            widget::segmented(&Side::ALL, draft.side, Message::SideSelected),
            widget::segmented(&OrderKind::ALL, draft.kind, Message::KindSelected),
            widget::labeled_input(
                "Symbol",
                "AAPL",
                &draft.symbol,
                rejected != Some(OrderError::Symbol),
                Message::SymbolChanged,
                Some(Message::Submit),
            ),
            widget::labeled_input(
                "Quantity",
                "1",
                &draft.quantity,
                rejected != Some(OrderError::Quantity),
                Message::QuantityChanged,
                Some(Message::Submit),
            ),
        ]
        .spacing(8);

        if draft.kind.requires_price() {
            form = form.push(widget::labeled_input(
                "Price",
                "0.00",
                &draft.price,
                rejected != Some(OrderError::Price),
                Message::PriceChanged,
                Some(Message::Submit),
            ));
        }

        if draft.kind.requires_trigger() {
            form = form.push(widget::labeled_input(
                "Trigger",
                "0.00",
                &draft.trigger,
                rejected != Some(OrderError::Trigger),
                Message::TriggerChanged,
                Some(Message::Submit),
            ));
        }

        form = form.push(
            button(text("Submit order"))
                .style(|theme, status| style::button::confirm(theme, status, true))
                .on_press(Message::Submit),
        );

        if let Some(feedback) = &self.feedback {
            let (message, is_error) = match feedback {
                Feedback::Rejected(err) => (err.to_string(), true),
                Feedback::Submitted(confirmation) => (confirmation.clone(), false),
            };
            form = form.push(
                text(message)
                    .size(12)
                    .style(move |theme| style::feedback_text(theme, is_error)),
            );
        }

        widget::section("Order", form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::Config;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session {
        Session::with_rng(&Config::default(), StdRng::seed_from_u64(3))
    }

    #[test]
    fn rejected_order_keeps_input() {
        let session = session();
        let mut panel = OrderPanel::new(session.ticker());

        panel.update(Message::KindSelected(OrderKind::Limit), &session);
        panel.update(Message::QuantityChanged("10".to_string()), &session);
        panel.update(Message::PriceChanged("0".to_string()), &session);
        panel.update(Message::Submit, &session);

        assert_eq!(panel.feedback, Some(Feedback::Rejected(OrderError::Price)));
        assert_eq!(panel.draft.quantity, "10");
        assert_eq!(panel.draft.kind, OrderKind::Limit);
    }

    #[test]
    fn submitted_order_resets_form_to_active_ticker() {
        let session = session();
        let mut panel = OrderPanel::new(session.ticker());

        panel.update(Message::SymbolChanged("msft".to_string()), &session);
        panel.update(Message::KindSelected(OrderKind::Limit), &session);
        panel.update(Message::QuantityChanged("10".to_string()), &session);
        panel.update(Message::PriceChanged("180".to_string()), &session);
        panel.update(Message::Submit, &session);

        assert_eq!(
            panel.feedback,
            Some(Feedback::Submitted(
                "Submitted ✅ Order: BUY MSFT | Type: LIMIT | Qty: 10 | Price: $180.00".to_string()
            ))
        );
        assert_eq!(panel.draft, Draft::new(session.ticker()));
    }

    #[test]
    fn market_order_quotes_last_chart_price() {
        let session = session();
        let mut panel = OrderPanel::new(session.ticker());

        panel.update(Message::QuantityChanged("1".to_string()), &session);
        panel.update(Message::Submit, &session);

        let last = session.series().last().unwrap();
        let Some(Feedback::Submitted(message)) = &panel.feedback else {
            panic!("order should be accepted");
        };
        assert!(message.ends_with(&format!("Price: Market (~${last:.2})")));
    }

    #[test]
    fn symbol_follows_active_ticker() {
        let mut panel = OrderPanel::new(&Ticker::parse("AAPL").unwrap());
        panel.sync_symbol(&Ticker::parse("tsla").unwrap());

        assert_eq!(panel.draft.symbol, "TSLA");
    }
}
