//! Then steps for task record BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::then;
use taskstore::task::{
    domain::{Task, TaskValidationError},
    services::TaskServiceError,
};

/// Reads the last update outcome out of the world.
fn updated_task(world: &TaskWorld) -> Result<&Task, eyre::Report> {
    let update_result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;
    update_result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected update failure: {err}"))
}

#[then("the task is stored as pending with matching timestamps")]
fn task_stored_pending(world: &TaskWorld) -> Result<(), eyre::Report> {
    let create_result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    let task = create_result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected task creation failure: {err}"))?;

    if task.completed() {
        return Err(eyre::eyre!("expected a newly created task to be pending"));
    }
    if task.created_at() != task.updated_at() {
        return Err(eyre::eyre!(
            "expected created_at and updated_at timestamps to match at creation"
        ));
    }
    Ok(())
}

#[then("the task can be retrieved by its identifier")]
fn task_retrievable_by_id(world: &TaskWorld) -> Result<(), eyre::Report> {
    let stored = world
        .stored_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;
    let fetched = run_async(world.service.get_task(stored.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    if &fetched != stored {
        return Err(eyre::eyre!("retrieved task does not match created task"));
    }
    Ok(())
}

#[then("task creation fails because the title is empty")]
fn creation_fails_for_empty_title(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;

    if !matches!(
        result,
        Err(TaskServiceError::Validation(TaskValidationError::EmptyTitle))
    ) {
        return Err(eyre::eyre!(
            "expected empty-title validation error, got {result:?}"
        ));
    }
    Ok(())
}

#[then(r#"the task reads as completed with the message "{message}""#)]
fn task_reads_completed(world: &TaskWorld, message: String) -> Result<(), eyre::Report> {
    let toggle = world
        .last_toggle
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing toggle outcome in scenario world"))?;
    if !toggle.completed {
        return Err(eyre::eyre!("expected the toggle to mark the task completed"));
    }
    if toggle.message != message {
        return Err(eyre::eyre!(
            "expected message {message:?}, found {:?}",
            toggle.message
        ));
    }
    Ok(())
}

#[then(r#"the task reads as pending with the message "{message}""#)]
fn task_reads_pending(world: &TaskWorld, message: String) -> Result<(), eyre::Report> {
    let toggle = world
        .last_toggle
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing toggle outcome in scenario world"))?;
    if toggle.completed {
        return Err(eyre::eyre!("expected the toggle to mark the task pending"));
    }
    if toggle.message != message {
        return Err(eyre::eyre!(
            "expected message {message:?}, found {:?}",
            toggle.message
        ));
    }
    Ok(())
}

#[then(r#"the task title reads "{title}""#)]
fn updated_title_reads(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let task = updated_task(world)?;
    if task.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, found {:?}",
            task.title().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task description still reads "{description}""#)]
fn updated_description_reads(world: &TaskWorld, description: String) -> Result<(), eyre::Report> {
    let task = updated_task(world)?;
    if task.description().as_str() != description {
        return Err(eyre::eyre!(
            "expected description {description:?}, found {:?}",
            task.description().as_str()
        ));
    }
    Ok(())
}

#[then(r#"only the task titled "{title}" is found"#)]
fn only_titled_task_found(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let found = world
        .last_search
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing search outcome in scenario world"))?;
    if found.len() != 1 {
        return Err(eyre::eyre!(
            "expected exactly one match, found {}",
            found.len()
        ));
    }
    let matched = found
        .first()
        .ok_or_else(|| eyre::eyre!("missing search match"))?;
    if matched.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected match titled {title:?}, found {:?}",
            matched.title().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the deletion is confirmed with the message "{message}""#)]
fn deletion_confirmed(world: &TaskWorld, message: String) -> Result<(), eyre::Report> {
    let deletion = world
        .last_deletion
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing deletion outcome in scenario world"))?;
    if deletion.message != message {
        return Err(eyre::eyre!(
            "expected message {message:?}, found {:?}",
            deletion.message
        ));
    }
    Ok(())
}

#[then("the task can no longer be retrieved")]
fn task_no_longer_retrievable(world: &TaskWorld) -> Result<(), eyre::Report> {
    let stored = world
        .stored_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;
    let lookup = run_async(world.service.get_task(stored.id()));
    if !matches!(lookup, Err(TaskServiceError::NotFound(_))) {
        return Err(eyre::eyre!(
            "expected a not-found error after deletion, got {lookup:?}"
        ));
    }
    Ok(())
}

#[then("the statistics report {total:u64} total, {completed:u64} completed, {pending:u64} pending")]
fn statistics_report_counts(
    world: &TaskWorld,
    total: u64,
    completed: u64,
    pending: u64,
) -> Result<(), eyre::Report> {
    let stats = run_async(world.service.statistics())
        .map_err(|err| eyre::eyre!("statistics failed: {err}"))?;
    if stats.total != total || stats.completed != completed || stats.pending != pending {
        return Err(eyre::eyre!(
            "expected counts {total}/{completed}/{pending}, found {}/{}/{}",
            stats.total,
            stats.completed,
            stats.pending
        ));
    }
    Ok(())
}

#[then(r#"the completion rate reads "{rate}""#)]
fn completion_rate_reads(world: &TaskWorld, rate: String) -> Result<(), eyre::Report> {
    let stats = run_async(world.service.statistics())
        .map_err(|err| eyre::eyre!("statistics failed: {err}"))?;
    let formatted = format!("{:.2}", stats.completion_rate);
    if formatted != rate {
        return Err(eyre::eyre!(
            "expected completion rate {rate}, found {formatted}"
        ));
    }
    Ok(())
}
