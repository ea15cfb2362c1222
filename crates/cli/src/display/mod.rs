//! Affichage en terminal

pub mod annotations;
