use std::time::Duration;

pub const HEADING: &str = "How Third-Party Logistics (3PL) Works";
pub const FOOTER: &str = "Streamline your logistics with professional 3PL services";

pub const STEP_STAGGER: Duration = Duration::from_millis(200);
pub const FADE_DURATION: Duration = Duration::from_millis(500);
pub const FOOTER_DELAY: Duration = Duration::from_millis(1000);
/// Columns a step travels while sliding in
pub const SLIDE_COLUMNS: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    Storefront,
    Truck,
    Globe,
}

impl StepIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            StepIcon::Storefront => "🏬",
            StepIcon::Truck => "🚚",
            StepIcon::Globe => "🌐",
        }
    }

    pub fn ascii_glyph(&self) -> &'static str {
        match self {
            StepIcon::Storefront => "[#]",
            StepIcon::Truck => "[=]",
            StepIcon::Globe => "(o)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: StepIcon,
}

pub const STEPS: [ProcessStep; 5] = [
    ProcessStep {
        title: "Manufacturing",
        description: "Your business orders/makes products",
        icon: StepIcon::Storefront,
    },
    ProcessStep {
        title: "Warehouse Reception",
        description: "Products shipped to 3PL warehouse",
        icon: StepIcon::Truck,
    },
    ProcessStep {
        title: "Inventory Management",
        description: "Inventory warehoused and managed by 3PL",
        icon: StepIcon::Storefront,
    },
    ProcessStep {
        title: "Order Processing",
        description: "Orders received and processed",
        icon: StepIcon::Globe,
    },
    ProcessStep {
        title: "Fulfillment",
        description: "Orders picked, packed and shipped",
        icon: StepIcon::Truck,
    },
];

/// Fraction (0.0..=1.0) of an entrance animation that has played
fn progress(delay: Duration, elapsed: Duration) -> f64 {
    match elapsed.checked_sub(delay) {
        Some(into) => (into.as_secs_f64() / FADE_DURATION.as_secs_f64()).min(1.0),
        None => 0.0,
    }
}

pub fn step_progress(index: usize, elapsed: Duration) -> f64 {
    progress(STEP_STAGGER * index as u32, elapsed)
}

pub fn footer_progress(elapsed: Duration) -> f64 {
    progress(FOOTER_DELAY, elapsed)
}

/// Remaining horizontal offset for a step at the given progress
pub fn slide_offset(progress: f64) -> u16 {
    ((1.0 - progress.clamp(0.0, 1.0)) * SLIDE_COLUMNS as f64).round() as u16
}

pub fn reveal_finished(elapsed: Duration) -> bool {
    footer_progress(elapsed) >= 1.0 && step_progress(STEPS.len() - 1, elapsed) >= 1.0
}
