//! When steps for task record BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use taskstore::task::{
    domain::Task,
    services::{CreateTaskRequest, UpdateTaskRequest},
};

#[when("the task is created")]
fn create_pending_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let title = world
        .pending_title
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending title in scenario world"))?;
    let request = CreateTaskRequest {
        title,
        description: world.pending_description.clone(),
    };

    let result = run_async(world.service.create_task(request));
    if let Ok(task) = &result {
        world.stored_task = Some(task.clone());
    }
    world.last_create_result = Some(result);
    Ok(())
}

#[when("the task completion is toggled")]
fn toggle_task_completion(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .stored_task
        .as_ref()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;
    let toggle = run_async(world.service.toggle_completion(id))
        .map_err(|err| eyre::eyre!("toggle failed: {err}"))?;
    world.last_toggle = Some(toggle);
    Ok(())
}

#[when(r#"the task title is changed to "{title}""#)]
fn change_task_title(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .stored_task
        .as_ref()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;
    let request = UpdateTaskRequest {
        title: Some(title),
        ..UpdateTaskRequest::default()
    };
    world.last_update_result = Some(run_async(world.service.update_task(id, request)));
    Ok(())
}

#[when(r#"tasks are searched for "{query}""#)]
fn search_stored_tasks(world: &mut TaskWorld, query: String) -> Result<(), eyre::Report> {
    let found = run_async(world.service.search_tasks(&query))
        .map_err(|err| eyre::eyre!("search failed: {err}"))?;
    world.last_search = Some(found);
    Ok(())
}

#[when("the task is deleted")]
fn delete_stored_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .stored_task
        .as_ref()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;
    let deletion = run_async(world.service.delete_task(id))
        .map_err(|err| eyre::eyre!("deletion failed: {err}"))?;
    world.last_deletion = Some(deletion);
    Ok(())
}
