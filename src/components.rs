//! Content blocks the pages are assembled from.

/// Card with a title, a short description, bullets and an optional badge.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub desc: &'static str,
    pub bullets: &'static [&'static str],
    pub badge: Option<&'static str>,
}

/// Labeled text input bound to one submission field.
#[derive(Debug, Clone, Copy)]
pub struct TextInput {
    pub label: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
}

/// Labeled select with a fixed option list.
#[derive(Debug, Clone, Copy)]
pub struct Select {
    pub label: &'static str,
    pub name: &'static str,
    pub options: &'static [&'static str],
    pub required: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const SERVICES: [Card; 3] = [
    Card {
        title: "Mobile Bartending",
        desc: "Professional bartending for private + corporate events across the NW suburbs and Chicagoland.",
        bullets: &[
            "Setup + breakdown included",
            "Fast, clean service flow",
            "Guest-first hospitality",
        ],
        badge: Some("Most Popular"),
    },
    Card {
        title: "Signature Cocktails",
        desc: "Custom menus built around your theme: bold flavors, gorgeous garnish, elevated glassware.",
        bullets: &["Menu consultation", "Mocktails available", "Seasonal specials"],
        badge: None,
    },
    Card {
        title: "Premium Aesthetic",
        desc: "A bar that looks like it belongs at a luxury venue, because it does.",
        bullets: &["Styled presentation", "Photo-ready setup", "Modern, vibrant vibe"],
        badge: None,
    },
];

pub const PACKAGES: [Card; 3] = [
    Card {
        title: "Classic",
        desc: "Perfect for intimate events that still want luxury.",
        bullets: &["Up to 4 hours", "Beer/wine + 2 cocktails", "Styled garnish bar"],
        badge: Some("Starter"),
    },
    Card {
        title: "Signature",
        desc: "The full Sip & Slay experience, premium and vibrant.",
        bullets: &[
            "Up to 5 hours",
            "3–4 signature cocktails",
            "Menu + vibe consultation",
        ],
        badge: Some("Best Value"),
    },
    Card {
        title: "Ultra",
        desc: "Big events, big energy. Elevated from start to finish.",
        bullets: &["6+ hours", "Full custom menu", "Premium presentation upgrades"],
        badge: Some("Luxury"),
    },
];

pub const FAQS: [Faq; 2] = [
    Faq {
        question: "Do you provide alcohol?",
        answer: "Typically, clients purchase alcohol and we provide the expertise, menu, and service. We’ll tell you exactly what to buy and how much.",
    },
    Faq {
        question: "What areas do you serve?",
        answer: "Northwest suburbs + Chicagoland. If you’re unsure, send the city and we’ll confirm.",
    },
];

/// Inputs laid out in the two-column grid of the quote form.
pub const QUOTE_GRID_INPUTS: [TextInput; 8] = [
    TextInput {
        label: "Name",
        name: "name",
        kind: "text",
        placeholder: "Your name (optional)",
        required: false,
    },
    TextInput {
        label: "Email",
        name: "email",
        kind: "email",
        placeholder: "you@email.com",
        required: true,
    },
    TextInput {
        label: "Phone",
        name: "phone",
        kind: "text",
        placeholder: "(555) 555-5555",
        required: true,
    },
    TextInput {
        label: "Date",
        name: "date",
        kind: "text",
        placeholder: "MM/DD/YYYY",
        required: true,
    },
    TextInput {
        label: "City",
        name: "city",
        kind: "text",
        placeholder: "Chicago, Arlington Heights, etc.",
        required: true,
    },
    TextInput {
        label: "Guest count",
        name: "guestCount",
        kind: "text",
        placeholder: "e.g., 45",
        required: true,
    },
    TextInput {
        label: "Event type",
        name: "eventType",
        kind: "text",
        placeholder: "Birthday, wedding, corporate, etc.",
        required: true,
    },
    TextInput {
        label: "Hours",
        name: "hours",
        kind: "text",
        placeholder: "e.g., 4",
        required: true,
    },
];

pub const VIBE_INPUT: TextInput = TextInput {
    label: "Vibe / theme",
    name: "vibeTheme",
    kind: "text",
    placeholder: "Elegant, fun, black & gold, Barbie, etc.",
    required: true,
};

pub const ALCOHOL_SELECT: Select = Select {
    label: "Alcohol preference",
    name: "alcoholPreference",
    options: &["Cocktails", "Mocktails", "Both"],
    required: true,
};

#[cfg(test)]
mod tests {
    use sipandslay_contact::RequiredField;
    use strum::VariantArray;

    use super::*;

    #[test]
    fn form_covers_every_required_field() {
        let names: Vec<&str> = QUOTE_GRID_INPUTS
            .iter()
            .chain([&VIBE_INPUT])
            .filter(|input| input.required)
            .map(|input| input.name)
            .chain([ALCOHOL_SELECT.name])
            .collect();

        for field in RequiredField::VARIANTS {
            assert!(names.contains(&field.as_ref()), "no input for {field}");
        }
    }
}
