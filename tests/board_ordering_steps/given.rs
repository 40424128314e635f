//! Given steps for board ordering BDD scenarios.

use std::sync::Arc;

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskmatrix::identity::domain::{EmailAddress, UserId, UserIdentity};
use taskmatrix::project::{domain::Project, ports::ProjectRepository, services::ProjectWorkspace};
use taskmatrix::task::domain::TaskValidationConfig;

#[given(r#"an empty project named "{name}""#)]
fn empty_project(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let email = EmailAddress::new("olive@example.com").wrap_err("owner email")?;
    let owner = UserIdentity::new(UserId::new(), email, "Olive Owner");
    let project = Project::create(&name, &owner, &DefaultClock).wrap_err("create project")?;
    run_async(world.projects.replace(&project)).wrap_err("store new project")?;

    let dispatcher = world.spawn_dispatcher();
    world.workspace = Some(ProjectWorkspace::new(
        project,
        Arc::new(DefaultClock),
        TaskValidationConfig::default(),
        dispatcher,
    ));
    Ok(())
}
