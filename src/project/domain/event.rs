//! Calendar events shown alongside task due dates.

use super::{EventId, ProjectDomainError};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Display colour of a calendar event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventColor {
    /// Blue.
    #[default]
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
    /// Pink.
    Pink,
}

/// Request payload for scheduling a calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    title: String,
    date: NaiveDate,
    time: Option<NaiveTime>,
    description: Option<String>,
    color: EventColor,
}

impl NewEvent {
    /// Creates a request for an all-day event.
    #[must_use]
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            time: None,
            description: None,
            color: EventColor::default(),
        }
    }

    /// Sets the start time.
    #[must_use]
    pub const fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the colour.
    #[must_use]
    pub const fn with_color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }
}

/// An event on the project calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    id: EventId,
    title: String,
    date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    color: EventColor,
}

impl CalendarEvent {
    /// Creates an event from a request.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyEventTitle`] for a blank title.
    pub fn create(request: NewEvent) -> Result<Self, ProjectDomainError> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(ProjectDomainError::EmptyEventTitle);
        }
        Ok(Self {
            id: EventId::new(),
            title: title.to_owned(),
            date: request.date,
            time: request.time,
            description: request
                .description
                .map(|text| text.trim().to_owned())
                .filter(|text| !text.is_empty()),
            color: request.color,
        })
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the start time, if any.
    #[must_use]
    pub const fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the colour.
    #[must_use]
    pub const fn color(&self) -> EventColor {
        self.color
    }
}
