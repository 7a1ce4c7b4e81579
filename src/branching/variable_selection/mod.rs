//! Variable selection through a move-to-front queue; see [`Vmtf`].

mod vmtf;

pub(crate) use vmtf::Vmtf;
