mod salt_and_pepper;

pub use salt_and_pepper::{
    salt_and_pepper, salt_and_pepper_dynamic, salt_and_pepper_mut, NoiseStats,
};
