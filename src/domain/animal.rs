use std::fmt;

/// A single animal held by the zoo.
///
/// Records are immutable once constructed; to change one, remove it and add
/// a replacement. The identifier is caller-supplied and must be unique
/// within the animal repository at the time of insertion (checked by the
/// caller, not re-validated here).
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    /// Unique identifier within the animal repository.
    pub id: u32,
    /// The animal's name.
    pub name: String,
    /// Species, drawn from the fixed menu set.
    pub species: Species,
    /// Age in years.
    pub age: u32,
    /// Weight in kilograms.
    pub weight: f64,
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Animal(id={}, name={}, species={}, age={}, weight={})",
            self.id, self.name, self.species, self.age, self.weight
        )
    }
}

impl crate::storage::Record for Animal {
    fn id(&self) -> u32 {
        self.id
    }
}

/// The species an animal can belong to.
///
/// This is a closed set, selected from a numbered menu rather than typed
/// freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    /// African lion.
    Lion,
    /// Tiger.
    Tiger,
    /// Elephant.
    Elephant,
    /// Eagle.
    Eagle,
}

impl Species {
    /// Every species, in menu order.
    pub const ALL: [Self; 4] = [Self::Lion, Self::Tiger, Self::Elephant, Self::Eagle];

    /// The display name of the species.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lion => "Lion",
            Self::Tiger => "Tiger",
            Self::Elephant => "Elephant",
            Self::Eagle => "Eagle",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{Animal, Species};

    #[test]
    fn renders_as_a_single_line() {
        let animal = Animal {
            id: 5,
            name: "Leo".to_string(),
            species: Species::Lion,
            age: 4,
            weight: 190.5,
        };
        assert_eq!(
            animal.to_string(),
            "Animal(id=5, name=Leo, species=Lion, age=4, weight=190.5)"
        );
    }

    #[test]
    fn species_menu_order_is_stable() {
        let labels: Vec<_> = Species::ALL.iter().map(|species| species.name()).collect();
        assert_eq!(labels, ["Lion", "Tiger", "Elephant", "Eagle"]);
    }
}
