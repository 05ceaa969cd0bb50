//! Status messages emitted by the machine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseError;

/// Language used when rendering a [`Notice`] as text.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Russian,
    English,
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "russian" => Ok(Self::Russian),
            "en" | "english" => Ok(Self::English),
            _ => Err(ParseError::UnknownLanguage(s.to_string())),
        }
    }
}

/// What the machine tells the customer after an action.
///
/// There is one variant per cell of the transition table. The two
/// "already selected" cells differ: while waiting for money the machine
/// also reminds the customer to pay.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    // Idle
    TicketSelected,
    SelectTicketFirst,
    SelectAndPayFirst,
    NothingToCancel,
    // WaitingForMoney
    AwaitingMoney,
    MoneyInserted,
    PayFirst,
    TransactionCanceled,
    // MoneyReceived
    AlreadySelected,
    AlreadyPaid,
    TicketDispensed,
    MoneyRefunded,
    // TransactionCanceled
    SelectAgain,
    StartOver,
    CannotDispense,
    AlreadyCanceled,
}

impl Notice {
    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::Russian => self.russian(),
            Language::English => self.english(),
        }
    }

    fn russian(&self) -> &'static str {
        match self {
            Self::TicketSelected => "Билет выбран. Переход в состояние ожидания внесения денег.",
            Self::SelectTicketFirst => "Сначала выберите билет.",
            Self::SelectAndPayFirst => "Сначала выберите билет и внесите деньги.",
            Self::NothingToCancel => "Нечего отменять.",
            Self::AwaitingMoney => "Билет уже выбран. Ожидаем внесения денег.",
            Self::MoneyInserted => "Деньги внесены. Переход в состояние выдачи билета.",
            Self::PayFirst => "Сначала внесите деньги.",
            Self::TransactionCanceled => "Транзакция отменена. Возврат в начальное состояние.",
            Self::AlreadySelected => "Билет уже выбран.",
            Self::AlreadyPaid => "Деньги уже внесены.",
            Self::TicketDispensed => "Билет выдан. Возврат в начальное состояние.",
            Self::MoneyRefunded => {
                "Транзакция отменена. Деньги возвращены. Возврат в начальное состояние."
            }
            Self::SelectAgain => "Транзакция отменена. Выберите билет заново.",
            Self::StartOver => "Транзакция отменена. Начните заново.",
            Self::CannotDispense => "Транзакция отменена. Выдача билета невозможна.",
            Self::AlreadyCanceled => "Транзакция уже отменена.",
        }
    }

    fn english(&self) -> &'static str {
        match self {
            Self::TicketSelected => "Ticket selected. Waiting for money.",
            Self::SelectTicketFirst => "Select a ticket first.",
            Self::SelectAndPayFirst => "Select a ticket and insert money first.",
            Self::NothingToCancel => "Nothing to cancel.",
            Self::AwaitingMoney => "Ticket already selected. Waiting for money.",
            Self::MoneyInserted => "Money inserted. Ready to dispense the ticket.",
            Self::PayFirst => "Insert money first.",
            Self::TransactionCanceled => "Transaction canceled. Returning to the initial state.",
            Self::AlreadySelected => "Ticket already selected.",
            Self::AlreadyPaid => "Money already inserted.",
            Self::TicketDispensed => "Ticket dispensed. Returning to the initial state.",
            Self::MoneyRefunded => {
                "Transaction canceled. Money refunded. Returning to the initial state."
            }
            Self::SelectAgain => "Transaction was canceled. Select a ticket again.",
            Self::StartOver => "Transaction was canceled. Start over.",
            Self::CannotDispense => "Transaction was canceled. Cannot dispense a ticket.",
            Self::AlreadyCanceled => "Transaction already canceled.",
        }
    }
}
