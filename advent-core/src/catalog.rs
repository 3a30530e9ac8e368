//! Catalog of registered puzzles
//!
//! Puzzles register themselves as [`PuzzleEntry`] values collected through
//! `inventory`; a [`CatalogBuilder`] turns the collected entries (or an
//! explicit selection of them) into an immutable [`Catalog`] keyed by year
//! and day. The catalog iterates in ascending (year, day) order, which is
//! also the order the runner displays.

use crate::error::{ParseError, PuzzleError, RegistrationError};
use crate::instance::{DynPuzzle, PuzzleInstance};
use crate::puzzle::Puzzle;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

/// First day of an advent calendar
pub const FIRST_DAY: u8 = 1;
/// Last day of an advent calendar
pub const LAST_DAY: u8 = 25;

/// Identity of one puzzle: its year and day.
///
/// Ordering is (year, day) ascending, which the catalog relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day{:02}", self.year, self.day)
    }
}

/// Factory closure that parses input and yields a type-erased instance
pub type PuzzleFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError> + Send + Sync>;

/// Metadata for one registered puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    /// Year and day
    pub id: PuzzleId,
    /// Number of parts the puzzle answers
    pub parts: u8,
}

struct CatalogSlot {
    factory: PuzzleFactory,
    parts: u8,
}

/// Builder for a [`Catalog`].
///
/// Registration is duplicate-checked and day-range-checked. The fluent API
/// consumes and returns the builder so registrations chain:
///
/// ```
/// use advent_core::{Catalog, CatalogBuilder, RegistrationError};
///
/// fn build() -> Result<Catalog, RegistrationError> {
///     Ok(CatalogBuilder::new().with_registered()?.build())
/// }
/// ```
pub struct CatalogBuilder {
    slots: BTreeMap<PuzzleId, CatalogSlot>,
}

impl CatalogBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Register a factory for a year-day slot.
    ///
    /// # Errors
    ///
    /// [`RegistrationError::DayOutOfRange`] if `day` is not in 1..=25,
    /// [`RegistrationError::Duplicate`] if the slot is already taken.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if !(FIRST_DAY..=LAST_DAY).contains(&day) {
            return Err(RegistrationError::DayOutOfRange(year, day));
        }

        match self.slots.entry(PuzzleId { year, day }) {
            Entry::Occupied(_) => Err(RegistrationError::Duplicate(year, day)),
            Entry::Vacant(slot) => {
                slot.insert(CatalogSlot {
                    factory: Box::new(factory),
                    parts,
                });
                Ok(self)
            }
        }
    }

    /// Register every entry collected through `inventory`
    pub fn with_registered(self) -> Result<Self, RegistrationError> {
        self.with_registered_filtered(|_| true)
    }

    /// Register the collected entries that match `keep`.
    ///
    /// ```no_run
    /// # use advent_core::CatalogBuilder;
    /// // Only the work-in-progress puzzles
    /// let catalog = CatalogBuilder::new()
    ///     .with_registered_filtered(|entry| entry.has_tag("wip"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn with_registered_filtered<F>(mut self, keep: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzleEntry) -> bool,
    {
        for entry in inventory::iter::<PuzzleEntry>() {
            if keep(entry) {
                self = entry.puzzle.register_into(self, entry.year, entry.day)?;
            }
        }
        Ok(self)
    }

    /// Finish the builder and produce an immutable catalog
    pub fn build(self) -> Catalog {
        Catalog { slots: self.slots }
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from (year, day) to puzzle factories
pub struct Catalog {
    slots: BTreeMap<PuzzleId, CatalogSlot>,
}

impl Catalog {
    /// Parse `input` with the registered puzzle for `year`/`day` and return
    /// a runnable instance.
    pub fn instantiate<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynPuzzle + 'a>, PuzzleError> {
        let slot = self
            .slots
            .get(&PuzzleId { year, day })
            .ok_or(PuzzleError::Unknown(year, day))?;

        (slot.factory)(input).map_err(PuzzleError::Parse)
    }

    /// Metadata for a specific slot, if registered
    pub fn info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        let id = PuzzleId { year, day };
        self.slots.get(&id).map(|slot| PuzzleInfo {
            id,
            parts: slot.parts,
        })
    }

    /// Whether a puzzle is registered for `year`/`day`
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.slots.contains_key(&PuzzleId { year, day })
    }

    /// Metadata for every registered puzzle, in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.slots.iter().map(|(id, slot)| PuzzleInfo {
            id: *id,
            parts: slot.parts,
        })
    }

    /// Number of registered puzzles
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Type-erased self-registration for puzzle types.
///
/// [`Puzzle`] has associated types, so a `&dyn Puzzle` cannot exist; this
/// trait is the object-safe surface the plugin system stores. Every
/// `Puzzle + Sync + 'static` type gets it through the blanket impl below.
pub trait RegisterablePuzzle: Sync {
    /// Register this puzzle type into `builder` under `year`/`day`
    fn register_into(
        &self,
        builder: CatalogBuilder,
        year: u16,
        day: u8,
    ) -> Result<CatalogBuilder, RegistrationError>;
}

impl<P> RegisterablePuzzle for P
where
    P: Puzzle + Sync + 'static,
{
    fn register_into(
        &self,
        builder: CatalogBuilder,
        year: u16,
        day: u8,
    ) -> Result<CatalogBuilder, RegistrationError> {
        builder.register(year, day, P::PARTS, move |input: &str| {
            Ok(Box::new(PuzzleInstance::<P>::new(year, day, input)?))
        })
    }
}

/// One collected registration, submitted by `#[derive(Puzzle)]`.
///
/// Manual submission works too, for puzzles that implement [`Puzzle`]
/// without the derive:
///
/// ```ignore
/// inventory::submit! {
///     PuzzleEntry {
///         year: 2022,
///         day: 1,
///         puzzle: &Day1,
///         tags: &["calories"],
///     }
/// }
/// ```
pub struct PuzzleEntry {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The puzzle, behind its object-safe registration surface
    pub puzzle: &'static dyn RegisterablePuzzle,
    /// Tags for filtering (e.g. "wip")
    pub tags: &'static [&'static str],
}

impl PuzzleEntry {
    /// Whether this entry carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

inventory::collect!(PuzzleEntry);
