use std::fmt::Debug;
use std::fmt::Formatter;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::engine::variables::Literal;

/// Logs derived clauses to a writer in the textual DRAT format.
#[derive(Default, Debug)]
pub struct Proof {
    /// The proof, if one is being logged.
    proof_impl: Option<ProofImpl>,
}

impl Proof {
    /// Log the proof to an arbitrary writer.
    pub fn new(writer: impl Write + 'static) -> Self {
        Proof {
            proof_impl: Some(ProofImpl {
                writer: Box::new(writer),
            }),
        }
    }

    /// Log the proof to a (newly created) file.
    pub fn to_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Proof::new(BufWriter::new(file)))
    }

    pub fn is_logging(&self) -> bool {
        self.proof_impl.is_some()
    }

    pub(crate) fn trace_empty_clause(&mut self) -> std::io::Result<()> {
        self.trace_derived_clause(&[])?;
        match self.proof_impl.as_mut() {
            Some(proof) => proof.writer.flush(),
            None => Ok(()),
        }
    }

    pub(crate) fn trace_unit_clause(&mut self, literal: Literal) -> std::io::Result<()> {
        self.trace_derived_clause(&[literal])
    }

    pub(crate) fn trace_derived_clause(&mut self, literals: &[Literal]) -> std::io::Result<()> {
        if let Some(proof) = self.proof_impl.as_mut() {
            proof.add_clause(literals)
        } else {
            Ok(())
        }
    }
}

/// The actual implementation of the proof log.
struct ProofImpl {
    writer: Box<dyn Write>,
}

impl Debug for ProofImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProofImpl(<dyn Write>)")
    }
}

impl ProofImpl {
    fn add_clause(&mut self, literals: &[Literal]) -> std::io::Result<()> {
        for literal in literals {
            write!(self.writer, "{} ", literal.to_dimacs())?;
        }
        writeln!(self.writer, "0")
    }
}
