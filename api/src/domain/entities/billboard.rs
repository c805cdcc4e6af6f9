//! Billboard domain entity
//!
//! Billboards are promotional slots fetched independently per logical
//! position. The payload is opaque markup; only the slot matters for
//! placement.

use serde::{Deserialize, Serialize};

/// Logical billboard position in the home feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillboardSlot {
    FeedFirst,
    FeedSecond,
    FeedThird,
}

impl BillboardSlot {
    pub const ALL: [BillboardSlot; 3] = [
        BillboardSlot::FeedFirst,
        BillboardSlot::FeedSecond,
        BillboardSlot::FeedThird,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillboardSlot::FeedFirst => "feed_first",
            BillboardSlot::FeedSecond => "feed_second",
            BillboardSlot::FeedThird => "feed_third",
        }
    }
}

impl std::fmt::Display for BillboardSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BillboardSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feed_first" => Ok(BillboardSlot::FeedFirst),
            "feed_second" => Ok(BillboardSlot::FeedSecond),
            "feed_third" => Ok(BillboardSlot::FeedThird),
            _ => Err(format!("Unknown billboard slot: {}", s)),
        }
    }
}

/// A billboard payload tagged with its slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billboard {
    pub slot: BillboardSlot,
    /// Rendered billboard markup as received from upstream
    pub markup: String,
}

impl Billboard {
    pub fn new(slot: BillboardSlot, markup: impl Into<String>) -> Self {
        Self {
            slot,
            markup: markup.into(),
        }
    }
}

/// The three independently fetched billboard slots; any may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Billboards {
    pub first: Option<Billboard>,
    pub second: Option<Billboard>,
    pub third: Option<Billboard>,
}

#[cfg(test)]
impl Billboards {
    pub fn none() -> Self {
        Self::default()
    }

    /// Place a billboard into the slot it is tagged with
    pub fn with(mut self, billboard: Billboard) -> Self {
        let slot = billboard.slot;
        *self.slot_mut(slot) = Some(billboard);
        self
    }
}

impl Billboards {
    pub fn get(&self, slot: BillboardSlot) -> Option<&Billboard> {
        match slot {
            BillboardSlot::FeedFirst => self.first.as_ref(),
            BillboardSlot::FeedSecond => self.second.as_ref(),
            BillboardSlot::FeedThird => self.third.as_ref(),
        }
    }

    /// Remove and return the billboard for a slot
    pub fn take(&mut self, slot: BillboardSlot) -> Option<Billboard> {
        self.slot_mut(slot).take()
    }

    pub fn present_count(&self) -> usize {
        BillboardSlot::ALL
            .iter()
            .filter(|slot| self.get(**slot).is_some())
            .count()
    }

    fn slot_mut(&mut self, slot: BillboardSlot) -> &mut Option<Billboard> {
        match slot {
            BillboardSlot::FeedFirst => &mut self.first,
            BillboardSlot::FeedSecond => &mut self.second,
            BillboardSlot::FeedThird => &mut self.third,
        }
    }
}
