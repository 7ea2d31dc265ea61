//! The interactive menu loop.
//!
//! A strictly nested state machine: the root menu dispatches to one sub-menu
//! per record kind, and each sub-menu loops until the operator goes back.
//! Input and output are generic so tests can drive the loop with in-memory
//! buffers while `main` wires up locked stdin and stdout.

use std::{
    fmt,
    io::{BufRead, Write},
    str::FromStr,
};

use menagerie::{Animal, Enclosure, HabitatKind, Repository, Species};

use crate::cli::terminal::Paint;

/// What the caller should do after a menu interaction returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Carry on with the enclosing menu.
    Continue,
    /// The input stream is exhausted; unwind every menu level.
    Quit,
}

/// One field read from the operator.
enum Field<T> {
    /// The line parsed as the expected type.
    Value(T),
    /// The line did not parse. Per the menu contract this aborts the whole
    /// flow that asked for the field, not just the field itself.
    Invalid,
    /// End of input.
    Closed,
}

/// The interactive menu controller.
///
/// Owns both repositories for the lifetime of the process and is the only
/// thing that mutates them. Identifier uniqueness is enforced here, before
/// a record ever reaches its repository.
pub struct Menu<I, O> {
    input: I,
    output: O,
    animals: Repository<Animal>,
    habitats: Repository<Enclosure>,
}

impl<I: BufRead, O: Write> Menu<I, O> {
    /// Creates a menu controller over the given streams and repositories.
    pub const fn new(
        input: I,
        output: O,
        animals: Repository<Animal>,
        habitats: Repository<Enclosure>,
    ) -> Self {
        Self {
            input,
            output,
            animals,
            habitats,
        }
    }

    /// Runs the root menu until the operator exits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail or a repository flush fails.
    /// Flush failures are fatal; there is no recovery path.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "Zoo record management")?;
            writeln!(self.output, "1. Manage habitats")?;
            writeln!(self.output, "2. Manage animals")?;
            writeln!(self.output, "3. Exit")?;
            match self.read_field::<u32>("Select an option: ")? {
                Field::Value(1) => {
                    if self.habitat_menu()? == Flow::Quit {
                        break;
                    }
                }
                Field::Value(2) => {
                    if self.animal_menu()? == Flow::Quit {
                        break;
                    }
                }
                Field::Value(3) => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                Field::Closed => break,
                Field::Value(_) | Field::Invalid => {
                    writeln!(self.output, "{}", "Invalid option, try again.".error())?;
                }
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn habitat_menu(&mut self) -> anyhow::Result<Flow> {
        loop {
            writeln!(self.output, "Habitat management:")?;
            writeln!(self.output, "1. Add habitat")?;
            writeln!(self.output, "2. List habitats")?;
            writeln!(self.output, "3. Remove habitat")?;
            writeln!(self.output, "4. Back")?;
            match self.read_field::<u32>("Select an option: ")? {
                Field::Value(1) => {
                    if self.add_habitat()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Field::Value(2) => self.list_habitats()?,
                Field::Value(3) => {
                    if self.remove_habitat()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Field::Value(4) => return Ok(Flow::Continue),
                Field::Closed => return Ok(Flow::Quit),
                Field::Value(_) | Field::Invalid => {
                    writeln!(self.output, "{}", "Invalid option, try again.".error())?;
                }
            }
            writeln!(self.output)?;
        }
    }

    fn add_habitat(&mut self) -> anyhow::Result<Flow> {
        let id = match self.read_field::<u32>("Habitat id: ")? {
            Field::Value(id) => id,
            Field::Invalid => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };
        if self.habitats.exists(id) {
            writeln!(
                self.output,
                "{}",
                "A habitat with that id already exists.".error()
            )?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.read_line("Habitat name: ")? else {
            return Ok(Flow::Quit);
        };

        writeln!(self.output, "Habitat type:")?;
        let kind = match self.choose(&HabitatKind::ALL)? {
            Field::Value(kind) => kind,
            Field::Invalid => {
                writeln!(
                    self.output,
                    "{}",
                    "Invalid option, returning to menu.".error()
                )?;
                return Ok(Flow::Continue);
            }
            Field::Closed => return Ok(Flow::Quit),
        };

        let capacity = match self.read_field::<u32>("Habitat capacity: ")? {
            Field::Value(capacity) => capacity,
            Field::Invalid => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };

        self.habitats.add(Enclosure {
            id,
            name,
            kind,
            capacity,
        })?;
        writeln!(self.output, "{}", "Habitat added.".success())?;
        Ok(Flow::Continue)
    }

    fn list_habitats(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", "Habitats:".dim())?;
        for enclosure in self.habitats.list() {
            writeln!(self.output, "{enclosure}")?;
        }
        Ok(())
    }

    fn remove_habitat(&mut self) -> anyhow::Result<Flow> {
        let id = match self.read_field::<u32>("Id of the habitat to remove: ")? {
            Field::Value(id) => id,
            Field::Invalid => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };
        if self.habitats.remove(id)? {
            writeln!(self.output, "{}", "Habitat removed.".success())?;
        } else {
            writeln!(self.output, "{}", "No habitat found with that id.".error())?;
        }
        Ok(Flow::Continue)
    }

    fn animal_menu(&mut self) -> anyhow::Result<Flow> {
        loop {
            writeln!(self.output, "Animal management:")?;
            writeln!(self.output, "1. Add animal")?;
            writeln!(self.output, "2. List animals")?;
            writeln!(self.output, "3. Remove animal")?;
            writeln!(self.output, "4. Back")?;
            match self.read_field::<u32>("Select an option: ")? {
                Field::Value(1) => {
                    if self.add_animal()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Field::Value(2) => self.list_animals()?,
                Field::Value(3) => {
                    if self.remove_animal()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Field::Value(4) => return Ok(Flow::Continue),
                Field::Closed => return Ok(Flow::Quit),
                Field::Value(_) | Field::Invalid => {
                    writeln!(self.output, "{}", "Invalid option, try again.".error())?;
                }
            }
            writeln!(self.output)?;
        }
    }

    fn add_animal(&mut self) -> anyhow::Result<Flow> {
        let id = match self.read_field::<u32>("Animal id: ")? {
            Field::Value(id) => id,
            Field::Invalid => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };
        if self.animals.exists(id) {
            writeln!(
                self.output,
                "{}",
                "An animal with that id already exists.".error()
            )?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.read_line("Animal name: ")? else {
            return Ok(Flow::Quit);
        };

        writeln!(self.output, "Animal species:")?;
        let species = match self.choose(&Species::ALL)? {
            Field::Value(species) => species,
            Field::Invalid => {
                writeln!(
                    self.output,
                    "{}",
                    "Invalid option, returning to menu.".error()
                )?;
                return Ok(Flow::Continue);
            }
            Field::Closed => return Ok(Flow::Quit),
        };

        let age = match self.read_field::<u32>("Animal age: ")? {
            Field::Value(age) => age,
            Field::Invalid => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };

        let weight = match self.read_field::<f64>("Animal weight: ")? {
            Field::Value(weight) => weight,
            Field::Invalid => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };

        self.animals.add(Animal {
            id,
            name,
            species,
            age,
            weight,
        })?;
        writeln!(self.output, "{}", "Animal added.".success())?;
        Ok(Flow::Continue)
    }

    fn list_animals(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", "Animals:".dim())?;
        for animal in self.animals.list() {
            writeln!(self.output, "{animal}")?;
        }
        Ok(())
    }

    fn remove_animal(&mut self) -> anyhow::Result<Flow> {
        let id = match self.read_field::<u32>("Id of the animal to remove: ")? {
            Field::Value(id) => id,
            Field::Invalid => return Ok(Flow::Continue),
            Field::Closed => return Ok(Flow::Quit),
        };
        if self.animals.remove(id)? {
            writeln!(self.output, "{}", "Animal removed.".success())?;
        } else {
            writeln!(self.output, "{}", "No animal found with that id.".error())?;
        }
        Ok(Flow::Continue)
    }

    /// Prints a numbered option list and reads one selection.
    ///
    /// Out-of-range and non-numeric selections are both [`Field::Invalid`].
    fn choose<T: Copy + fmt::Display>(&mut self, options: &[T]) -> anyhow::Result<Field<T>> {
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {option}", index + 1)?;
        }
        Ok(match self.read_field::<usize>("Select an option: ")? {
            Field::Value(choice) => choice
                .checked_sub(1)
                .and_then(|index| options.get(index))
                .map_or(Field::Invalid, |&option| Field::Value(option)),
            Field::Invalid => Field::Invalid,
            Field::Closed => Field::Closed,
        })
    }

    /// Prompts for one line and parses it as `T`.
    fn read_field<T: FromStr>(&mut self, prompt: &str) -> anyhow::Result<Field<T>> {
        match self.read_line(prompt)? {
            None => Ok(Field::Closed),
            Some(line) => Ok(line.trim().parse().map_or(Field::Invalid, Field::Value)),
        }
    }

    /// Prompts for one line of free text. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
