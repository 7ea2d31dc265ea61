use std::fmt;

/// A habitat enclosure.
///
/// Capacity is advisory only: no assignment relation exists between animals
/// and enclosures, so it is never checked against anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    /// Unique identifier within the enclosure repository.
    pub id: u32,
    /// The enclosure's name.
    pub name: String,
    /// Habitat kind, drawn from the fixed menu set.
    pub kind: HabitatKind,
    /// Maximum number of animals the enclosure can hold.
    pub capacity: u32,
}

impl fmt::Display for Enclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enclosure(id={}, name={}, type={}, capacity={})",
            self.id, self.name, self.kind, self.capacity
        )
    }
}

impl crate::storage::Record for Enclosure {
    fn id(&self) -> u32 {
        self.id
    }
}

/// The kind of habitat an enclosure provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitatKind {
    /// Dense tropical forest.
    Jungle,
    /// Arid desert.
    Desert,
    /// Open grassland.
    Savanna,
    /// Fresh or salt water.
    Aquatic,
}

impl HabitatKind {
    /// Every habitat kind, in menu order.
    pub const ALL: [Self; 4] = [Self::Jungle, Self::Desert, Self::Savanna, Self::Aquatic];

    /// The display name of the habitat kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jungle => "Jungle",
            Self::Desert => "Desert",
            Self::Savanna => "Savanna",
            Self::Aquatic => "Aquatic",
        }
    }
}

impl fmt::Display for HabitatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
