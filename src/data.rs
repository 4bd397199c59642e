//! Fixture data for the three views.
//!
//! Kept separate from the rendering code so a real data source could be
//! wired in later without touching the pages. Everything here is a
//! compile-time literal; nothing is loaded, computed, or persisted.

/// A labeled value shown in a bordered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: &'static str,
}

/// The three dashboard summary cards.
pub const DASHBOARD_CARDS: [SummaryCard; 3] = [
    SummaryCard {
        title: "Users",
        value: "1200",
    },
    SummaryCard {
        title: "Revenue",
        value: "$75,000",
    },
    SummaryCard {
        title: "Tickets",
        value: "320",
    },
];

/// One row of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRow {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub status: &'static str,
}

pub const USER_COLUMNS: [&str; 4] = ["Name", "Email", "Role", "Status"];

pub const USER_ROWS: [UserRow; 1] = [UserRow {
    name: "Rahul",
    email: "rahul@gmail.com",
    role: "User",
    status: "Active",
}];

/// One row of the revenue table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueRow {
    pub date: &'static str,
    pub item: &'static str,
    pub amount: &'static str,
    pub status: &'static str,
}

pub const REVENUE_COLUMNS: [&str; 4] = ["Date", "Movie Name", "Amount", "Payment Status"];

pub const REVENUE_ROWS: [RevenueRow; 2] = [
    RevenueRow {
        date: "10-12-2025",
        item: "Pushpa 2",
        amount: "₹450",
        status: "Paid",
    },
    RevenueRow {
        date: "12-12-2025",
        item: "Salaar",
        amount: "₹600",
        status: "Paid",
    },
];

/// The two summary blocks above the revenue table.
pub const REVENUE_SUMMARY: [SummaryCard; 2] = [
    SummaryCard {
        title: "Total Revenue",
        value: "₹75,000",
    },
    SummaryCard {
        title: "Today's Revenue",
        value: "₹3,200",
    },
];
