use crate::formation::{default_shape, FormationShape, SquadSize};

/// The currently chosen squad size and tactical shape.
#[derive(Debug, Clone)]
pub struct FormationSelection {
    squad_size: SquadSize,
    shape: FormationShape,
}

impl FormationSelection {
    pub fn new(squad_size: SquadSize) -> Self {
        FormationSelection {
            squad_size,
            shape: default_shape(squad_size),
        }
    }

    pub fn squad_size(&self) -> SquadSize {
        self.squad_size
    }

    pub fn shape(&self) -> &FormationShape {
        &self.shape
    }

    /// Replace the shape unconditionally. The catalog is not consulted -
    /// the hosting UI only offers valid shapes for the current size.
    pub fn set_shape(&mut self, shape: FormationShape) {
        self.shape = shape;
    }

    /// Replace the squad size and reset the shape to that size's first
    /// catalogued entry.
    pub fn set_squad_size(&mut self, squad_size: SquadSize) {
        self.squad_size = squad_size;
        self.shape = default_shape(squad_size);
    }
}
