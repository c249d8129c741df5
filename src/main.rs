//! Demo entry point for the duplicate-detection engine.
//!
//! Constructs a tiny in-memory pair of submissions, runs the default pass
//! table over them, and prints each pass's top matches. Real file discovery,
//! language-specific lexing, and CLI argument parsing are external
//! collaborators (SPEC_FULL.md §1's Non-goals) — this binary exists only to
//! exercise [`dupcheck::run`] end to end, the same role the teacher's
//! `main.rs` played for its own pipeline.

use std::error::Error;

use dupcheck::{run, EngineConfig, PassRegistry};
use submission::{File, FileBackedSubmission, FileId, PlainTextLexer, SubmissionId};

fn main() -> Result<(), Box<dyn Error>> {
    let lexer = PlainTextLexer;
    let registry = PassRegistry::default();
    let cfg = EngineConfig::default();

    let alice = FileBackedSubmission::new(
        SubmissionId(0),
        "/subs/alice",
        vec![File::new(
            FileId(0),
            "main.py",
            "def average(values):\n    return sum(values) / len(values)\n",
        )],
    )
    .with_submitter("alice");

    let bob = FileBackedSubmission::new(
        SubmissionId(1),
        "/subs/bob",
        vec![File::new(
            FileId(1),
            "main.py",
            "def average(items):\n    return sum(items) / len(items)\n",
        )],
    )
    .with_submitter("bob");

    let results = run(&registry, &cfg, &[alice, bob], &[], &[], &lexer)?;

    for (pass_name, pass_results) in &results {
        println!("pass `{pass_name}`: {} scored pair(s)", pass_results.len());
        for result in pass_results {
            println!(
                "  {:?} <-> {:?}: score {:.2}, {} group(s)",
                result.score.sub_a,
                result.score.sub_b,
                result.score.score,
                result.groups.len()
            );
        }
    }

    Ok(())
}
