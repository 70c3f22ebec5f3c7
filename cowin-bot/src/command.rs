//! Command router: turns an incoming message into at most one [`Command`].
//!
//! Text is split on whitespace. A message whose keyword or argument shape does not match any
//! command is ignored (`Ok(None)`); one whose shape matches but whose values are unusable (extra
//! tokens, impossible date, id overflow) is a validation error.

use chrono::NaiveDate;
use std::fmt;
use telegram_bot::{BotError, Message, MessageSource, Result};

/// Callback data prefix for pager buttons: `character#<page>`.
pub const CALLBACK_PREFIX: &str = "character#";

/// Calendar date in the provider's `DD-MM-YYYY` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDate(NaiveDate);

impl SlotDate {
    pub const FORMAT: &'static str = "%d-%m-%Y";

    /// Parses `DD-MM-YYYY`; the calendar date must exist.
    pub fn parse(s: &str) -> Result<Self> {
        if !is_date_shape(s) {
            return Err(BotError::Validation(format!(
                "date must look like DD-MM-YYYY, got {}",
                s
            )));
        }
        NaiveDate::parse_from_str(s, Self::FORMAT)
            .map(SlotDate)
            .map_err(|_| BotError::Validation(format!("{} is not a valid date", s)))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for SlotDate {
    fn from(date: NaiveDate) -> Self {
        SlotDate(date)
    }
}

impl fmt::Display for SlotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// Postal code, kept verbatim as typed (digits only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pincode(String);

impl Pincode {
    pub fn new(s: &str) -> Result<Self> {
        if is_digits(s) {
            Ok(Pincode(s.to_string()))
        } else {
            Err(BotError::Validation(format!("pincode must be digits, got {}", s)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A recognized command with its validated parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    States,
    Districts { state_id: u32 },
    FindByPin { date: SlotDate, pincode: Pincode },
    FindByDistrict { date: SlotDate, district_id: u32 },
    /// Pager button press (callback only).
    Page { page: usize },
}

impl Command {
    /// Routes a message by its source: typed text or keyboard callback.
    pub fn parse(message: &Message) -> Result<Option<Command>> {
        match message.source {
            MessageSource::Text => Self::parse_text(&message.content),
            MessageSource::Callback { .. } => Self::parse_callback(&message.content),
        }
    }

    pub fn parse_text(text: &str) -> Result<Option<Command>> {
        let mut tokens = text.split_whitespace();
        let Some(head) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        // Telegram commands: `/help`, `/states@MyBot`; trailing words are ignored.
        if let Some(name) = bot_command_name(head) {
            return Ok(match name {
                "help" => Some(Command::Help),
                "states" => Some(Command::States),
                _ => None,
            });
        }

        match head {
            "district" => {
                let Some(id) = args.first().copied().filter(|a| is_digits(a)) else {
                    return Ok(None);
                };
                ensure_arity(&args, 1, "district <state_id>")?;
                Ok(Some(Command::Districts {
                    state_id: parse_id(id, "state id")?,
                }))
            }
            "find_by_pin" => {
                let Some((date, pin)) = date_and_number(&args) else {
                    return Ok(None);
                };
                ensure_arity(&args, 2, "find_by_pin DD-MM-YYYY <pincode>")?;
                Ok(Some(Command::FindByPin {
                    date: SlotDate::parse(date)?,
                    pincode: Pincode::new(pin)?,
                }))
            }
            "find_by_district_id" => {
                let Some((date, id)) = date_and_number(&args) else {
                    return Ok(None);
                };
                ensure_arity(&args, 2, "find_by_district_id DD-MM-YYYY <district_id>")?;
                Ok(Some(Command::FindByDistrict {
                    date: SlotDate::parse(date)?,
                    district_id: parse_id(id, "district id")?,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Parses pager callback data `character#<page>`.
    pub fn parse_callback(data: &str) -> Result<Option<Command>> {
        let Some(page) = data.strip_prefix(CALLBACK_PREFIX).filter(|p| is_digits(p)) else {
            return Ok(None);
        };
        let page = page
            .parse()
            .map_err(|_| BotError::Validation(format!("page {} out of range", page)))?;
        Ok(Some(Command::Page { page }))
    }

    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::States => "states",
            Command::Districts { .. } => "district",
            Command::FindByPin { .. } => "find_by_pin",
            Command::FindByDistrict { .. } => "find_by_district_id",
            Command::Page { .. } => "page",
        }
    }
}

/// Callback data for a pager button pointing at `page`.
pub fn callback_data(page: usize) -> String {
    format!("{}{}", CALLBACK_PREFIX, page)
}

fn bot_command_name(token: &str) -> Option<&str> {
    let name = token.strip_prefix('/')?;
    Some(name.split('@').next().unwrap_or(name))
}

fn date_and_number<'a>(args: &[&'a str]) -> Option<(&'a str, &'a str)> {
    match args {
        [date, number, ..] if is_date_shape(date) && is_digits(number) => Some((*date, *number)),
        _ => None,
    }
}

fn ensure_arity(args: &[&str], expected: usize, usage: &str) -> Result<()> {
    if args.len() != expected {
        return Err(BotError::Validation(format!(
            "unexpected extra parameters, usage: {}",
            usage
        )));
    }
    Ok(())
}

fn parse_id(s: &str, what: &str) -> Result<u32> {
    s.parse()
        .map_err(|_| BotError::Validation(format!("{} {} is out of range", what, s)))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `\d{2}-\d{2}-\d{4}`
fn is_date_shape(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    matches!(parts.as_slice(), [d, m, y]
        if d.len() == 2 && m.len() == 2 && y.len() == 4
            && is_digits(d) && is_digits(m) && is_digits(y))
}
