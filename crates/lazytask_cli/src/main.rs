//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lazytask_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use lazytask_core::{FilterMode, MemoryKvStore, Priority, ScriptedPrompt, TaskStore};

fn main() {
    println!("lazytask_core ping={}", lazytask_core::ping());
    println!("lazytask_core version={}", lazytask_core::core_version());

    // One in-memory round-trip so the probe exercises the store, not just
    // crate linkage.
    let mut store = TaskStore::open(MemoryKvStore::new());
    match smoke_round_trip(&mut store) {
        Ok(()) => println!("lazytask_core smoke=ok"),
        Err(detail) => {
            eprintln!("lazytask_core smoke=error detail={detail}");
            std::process::exit(1);
        }
    }
}

fn smoke_round_trip(store: &mut TaskStore<MemoryKvStore>) -> Result<(), String> {
    let id = store
        .add("smoke check", None, Priority::Medium)
        .map_err(|err| err.to_string())?
        .ok_or("non-empty text should have created a task")?;
    store.toggle_complete(id).map_err(|err| err.to_string())?;

    let completed = store.visible_tasks(FilterMode::Completed, "");
    if completed.len() != 1 {
        return Err(format!(
            "expected 1 completed task after toggle, found {}",
            completed.len()
        ));
    }

    let prompt = ScriptedPrompt::new();
    prompt.push_confirm(true);
    store.delete(id, &prompt).map_err(|err| err.to_string())?;
    if !store.tasks().is_empty() {
        return Err(format!(
            "expected an empty list after delete, found {} tasks",
            store.tasks().len()
        ));
    }

    Ok(())
}
