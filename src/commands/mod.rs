//! The GL command set, grouped the way the OpenGL ES reference groups it.
//! Every command is an `impl Context` block forwarding to the bound host
//! context; nothing here keeps state of its own.

mod attrib;
mod draw;
mod objects;
mod query;
mod state;
mod transfer;
mod uniform;
