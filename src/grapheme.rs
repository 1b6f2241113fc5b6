//! Grapheme cluster boundary rules from UAX #29.
//!
//! [`is_grapheme_break`] decides a single boundary from the categories on
//! either side of it plus a [`ScanState`] summarising what came before. The
//! rules depend on context to the left, so a scan must start at a known
//! boundary and move forward; see [`crate::next_grapheme`].

use crate::{
    property::{is_extended_pictographic, is_incb_consonant, is_incb_linker},
    tables::grapheme::GraphemeCat::{self, *},
};

/// Progress through an Indic conjunct sequence (rule GB9c).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IncbState {
    /// Not inside a conjunct.
    #[default]
    None,
    /// A consonant has been seen, possibly followed by extenders.
    Consonant,
    /// A consonant followed by a linker has been seen; the next consonant
    /// joins the cluster.
    ConsonantLinker,
}

/// Running context for a forward boundary scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanState {
    ri_count: usize,
    in_ext_pict: bool,
    incb: IncbState,
}

impl ScanState {
    /// State after the first codepoint of a scan.
    pub fn new(cp: u32, cat: GraphemeCat) -> Self {
        ScanState {
            ri_count: if cat == GC_Regional_Indicator { 1 } else { 0 },
            in_ext_pict: is_extended_pictographic(cp),
            incb: if is_incb_consonant(cp) {
                IncbState::Consonant
            } else {
                IncbState::None
            },
        }
    }

    /// Folds in a codepoint that did not start a new cluster.
    ///
    /// Extend and ZWJ carry every piece of context through unchanged unless
    /// they are themselves significant (a linker advances the conjunct).
    pub fn advance(&mut self, cp: u32, cat: GraphemeCat) {
        let extends = matches!(cat, GC_Extend | GC_ZWJ);

        if cat == GC_Regional_Indicator {
            self.ri_count += 1;
        } else if !extends {
            self.ri_count = 0;
        }

        if is_extended_pictographic(cp) {
            self.in_ext_pict = true;
        } else if !extends {
            self.in_ext_pict = false;
        }

        if is_incb_consonant(cp) {
            self.incb = IncbState::Consonant;
        } else if is_incb_linker(cp) && self.incb != IncbState::None {
            self.incb = IncbState::ConsonantLinker;
        } else if !extends {
            self.incb = IncbState::None;
        }
    }

    /// Regional indicators seen in the current run.
    pub fn ri_count(&self) -> usize {
        self.ri_count
    }

    /// Whether the scan is inside an Extended_Pictographic run.
    pub fn in_ext_pict(&self) -> bool {
        self.in_ext_pict
    }

    /// Conjunct progress.
    pub fn incb(&self) -> IncbState {
        self.incb
    }
}

/// Returns whether a cluster boundary lies between a codepoint of category
/// `prev` and the following codepoint `curr_cp` of category `curr`.
///
/// Rules are tried in UAX #29 order and the first match decides.
pub fn is_grapheme_break(
    prev: GraphemeCat,
    curr: GraphemeCat,
    curr_cp: u32,
    state: &ScanState,
) -> bool {
    match (prev, curr) {
        // GB3
        (GC_CR, GC_LF) => false,
        // GB4
        (GC_Control | GC_CR | GC_LF, _) => true,
        // GB5
        (_, GC_Control | GC_CR | GC_LF) => true,
        // GB6
        (GC_L, GC_L | GC_V | GC_LV | GC_LVT) => false,
        // GB7
        (GC_LV | GC_V, GC_V | GC_T) => false,
        // GB8
        (GC_LVT | GC_T, GC_T) => false,
        // GB9, GB9a
        (_, GC_Extend | GC_ZWJ | GC_SpacingMark) => false,
        // GB9b
        (GC_Prepend, _) => false,
        // GB9c
        _ if state.incb == IncbState::ConsonantLinker && is_incb_consonant(curr_cp) => false,
        // GB11
        (GC_ZWJ, _) if state.in_ext_pict && is_extended_pictographic(curr_cp) => false,
        // GB12, GB13
        (GC_Regional_Indicator, GC_Regional_Indicator) => state.ri_count % 2 == 0,
        // GB999
        _ => true,
    }
}
