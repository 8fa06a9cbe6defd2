pub mod center_of_mass;
pub mod distribution;
pub mod interaction;
pub mod inverse_square_law;
pub mod phase_space;

pub use center_of_mass::center_of_mass;
pub use distribution::RandomDistribution;
pub use interaction::Interaction;
pub use inverse_square_law::InverseSquareLaw;
pub use phase_space::PhaseSpace;
