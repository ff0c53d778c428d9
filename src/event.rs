// src/event.rs
use crate::ui::IconName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Concert,
    Performance,
    Camp,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Concert, Category::Performance, Category::Camp];

    pub fn icon(self) -> IconName {
        match self {
            Category::Concert => IconName::Music,
            Category::Performance => IconName::Users,
            Category::Camp => IconName::Mountain,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Concert => "Concert",
            Category::Performance => "Performance",
            Category::Camp => "Camp",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Category::Concert => "accent-concert",
            Category::Performance => "accent-performance",
            Category::Camp => "accent-camp",
        }
    }

    /// Poster artwork shown on the front of the poster skin.
    pub fn image(self) -> &'static str {
        match self {
            Category::Concert => "img/concert.jpg",
            Category::Performance => "img/performance.jpg",
            Category::Camp => "img/camp.jpg",
        }
    }
}

/// One labelled row on a card face, e.g. "Price: 1500₽".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLine {
    pub icon: IconName,
    pub label: &'static str,
    pub value: &'static str,
    /// Booking rows (price, seats) use the category accent instead of the schedule colour.
    pub accent: bool,
}

impl DetailLine {
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// A show, battle or camp as it appears on the page. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub price: Option<&'static str>,
    pub capacity: Option<&'static str>,
}

impl Event {
    /// Date, time and venue. Always present.
    pub fn schedule_lines(&self) -> [DetailLine; 3] {
        [
            DetailLine { icon: IconName::Calendar, label: "Date", value: self.date, accent: false },
            DetailLine { icon: IconName::Clock, label: "Time", value: self.time, accent: false },
            DetailLine { icon: IconName::MapPin, label: "Venue", value: self.location, accent: false },
        ]
    }

    /// Price and seats, each only when the event has one.
    pub fn booking_lines(&self) -> Vec<DetailLine> {
        let mut lines = Vec::with_capacity(2);
        if let Some(price) = self.price {
            lines.push(DetailLine { icon: IconName::CreditCard, label: "Price", value: price, accent: true });
        }
        if let Some(capacity) = self.capacity {
            lines.push(DetailLine { icon: IconName::Users, label: "Seats", value: capacity, accent: true });
        }
        lines
    }

    /// Plain-text block used by the "Copy details" action.
    pub fn summary_text(&self) -> String {
        let mut out = format!("{} ({})\n{}\n\n", self.title, self.category.label(), self.description);
        for line in self.schedule_lines().iter().chain(self.booking_lines().iter()) {
            out.push_str(&line.text());
            out.push('\n');
        }
        out
    }
}

pub const EVENTS: &[Event] = &[
    Event {
        id: 1,
        title: "Hip-Hop Battle Night",
        date: "25 July 2025",
        time: "20:00",
        location: "PRAVDA Club",
        category: Category::Concert,
        description: "The city's best dancers go head to head! Heated battles, serious prizes and an unforgettable atmosphere. Come and see real hip-hop artistry up close.",
        price: Some("1500₽"),
        capacity: Some("200"),
    },
    Event {
        id: 2,
        title: "Street Dance Show",
        date: "30 July 2025",
        time: "19:30",
        location: "Molodyozhny Culture House",
        category: Category::Performance,
        description: "An original show featuring some of the best dancers in the country. Unique choreography, live music and stunning special effects.",
        price: Some("2000₽"),
        capacity: Some("500"),
    },
    Event {
        id: 3,
        title: "Hip-Hop Summer Camp",
        date: "5-12 August",
        time: "10:00-18:00",
        location: "Rhythm Retreat Base",
        category: Category::Camp,
        description: "A week-long intensive for every level. Master classes, battles, new friends and plenty of good vibes surrounded by nature.",
        price: Some("15000₽"),
        capacity: Some("50"),
    },
];
