//! Then steps for task form submission BDD scenarios.

use super::world::TaskFormWorld;
use rstest_bdd_macros::then;
use taskform::task_form::{
    domain::{TaskDraft, TaskField},
    services::SubmitOutcome,
};

#[then("the submission is saved")]
fn submission_is_saved(world: &TaskFormWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submit outcome"))?;
    if !matches!(outcome, SubmitOutcome::Saved { .. }) {
        return Err(eyre::eyre!("expected a saved submission, got {outcome:?}"));
    }
    Ok(())
}

#[then("the form is back to its defaults")]
fn form_is_back_to_defaults(world: &TaskFormWorld) -> Result<(), eyre::Report> {
    let draft = world.controller()?.snapshot().draft;
    eyre::ensure!(
        draft == TaskDraft::default(),
        "expected a blank draft, found {draft:?}"
    );
    Ok(())
}

#[then("the persisted task count is {count:usize}")]
fn persisted_task_count(world: &TaskFormWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world
        .persistence
        .tasks()
        .map_err(|err| eyre::eyre!("read stored tasks: {err}"))?;
    eyre::ensure!(
        stored.len() == count,
        "expected {count} stored tasks, found {}",
        stored.len()
    );
    Ok(())
}

#[then(r#"the title still reads "{title}""#)]
fn title_still_reads(world: &TaskFormWorld, title: String) -> Result<(), eyre::Report> {
    let snapshot = world.controller()?.snapshot();
    eyre::ensure!(
        snapshot.draft.title() == title,
        "expected title '{title}', found '{}'",
        snapshot.draft.title()
    );
    Ok(())
}

#[then(r#"the title error reads "{message}""#)]
fn title_error_reads(world: &TaskFormWorld, message: String) -> Result<(), eyre::Report> {
    let errors = world.controller()?.snapshot().errors;
    let actual = errors.message(TaskField::Title);
    eyre::ensure!(
        actual.as_deref() == Some(message.as_str()),
        "expected title error '{message}', found {actual:?}"
    );
    Ok(())
}

#[then(r#"the form shows the error "{message}""#)]
fn form_shows_error(world: &TaskFormWorld, message: String) -> Result<(), eyre::Report> {
    let snapshot = world.controller()?.snapshot();
    eyre::ensure!(
        snapshot.last_error.as_deref() == Some(message.as_str()),
        "expected form error '{message}', found {:?}",
        snapshot.last_error
    );
    let notified = world.notifier.last().map(|n| n.to_string());
    eyre::ensure!(
        notified.as_deref() == Some(message.as_str()),
        "expected notification '{message}', found {notified:?}"
    );
    Ok(())
}

#[then("the form accepts input again")]
fn form_accepts_input(world: &TaskFormWorld) -> Result<(), eyre::Report> {
    let snapshot = world.controller()?.snapshot();
    eyre::ensure!(!snapshot.is_disabled(), "expected the form to be enabled");
    Ok(())
}
