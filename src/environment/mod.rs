use std::collections::HashMap;

/// The variable store: one flat, global namespace of 32-bit integers.
///
/// Names are borrowed from the program text. A name is allocated at `0` when
/// the checker sees its declaration and is never removed afterwards.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment<'a> {
	variables: HashMap<&'a str, i32>,
}

impl<'a> Environment<'a> {
	pub fn new() -> Self { Self { variables: HashMap::new() } }

	/// Allocate `name` at zero. Returns `false` if it was already allocated,
	/// in which case its value is left untouched.
	pub fn allocate(&mut self, name: &'a str) -> bool {
		if self.variables.contains_key(name) {
			return false;
		}
		self.variables.insert(name, 0);
		true
	}

	pub fn is_allocated(&self, name: &str) -> bool { self.variables.contains_key(name) }

	pub fn get(&self, name: &str) -> Option<i32> { self.variables.get(name).copied() }

	/// Assign a value to an existing variable. Returns `false` if `name` was
	/// never allocated.
	pub fn assign(&mut self, name: &str, value: i32) -> bool {
		match self.variables.get_mut(name) {
			Some(slot) => {
				*slot = value;
				true
			}
			None => false,
		}
	}

	pub fn len(&self) -> usize { self.variables.len() }

	pub fn is_empty(&self) -> bool { self.variables.is_empty() }

	/// Variables sorted by name, for stable dumps.
	pub fn sorted(&self) -> Vec<(&'a str, i32)> {
		let mut variables: Vec<_> = self.variables.iter().map(|(&name, &value)| (name, value)).collect();
		variables.sort_unstable_by_key(|&(name, _)| name);
		variables
	}
}
