use crate::api::ApiClient;
use crate::cli::commands::{after_mutation, connect_logged_in, password_or_prompt, require_admin};
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::events::{DataEvent, Entity};
use crate::errors::{AppError, AppResult};
use crate::models::{User, UserPayload};
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Users { action } = cmd else {
        return Ok(());
    };

    let (api, session) = connect_logged_in(cfg)?;
    require_admin(&session, "manage users")?;

    match action {
        UserAction::List => print_users(&api.users()?),

        UserAction::Add {
            name,
            email,
            role,
            password,
        } => {
            let payload = UserPayload {
                name: non_empty(name, "name")?,
                email: non_empty(email, "email")?,
                role: *role,
                password: Some(password_or_prompt(password)?),
            };
            save(&api, None, &payload)?;
        }

        UserAction::Edit {
            id,
            name,
            email,
            role,
        } => {
            let current = find_user(&api, id)?;
            let payload = UserPayload {
                name: non_empty(name.as_deref().unwrap_or(&current.name), "name")?,
                email: non_empty(email.as_deref().unwrap_or(&current.email), "email")?,
                role: role.unwrap_or(current.role),
                password: None,
            };
            save(&api, Some(&current.id), &payload)?;
        }

        UserAction::Del { id, yes } => {
            let user = find_user(&api, id)?;
            let prompt = format!("Delete user '{}' <{}>?", user.name, user.email);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
            api.delete_user(&user.id)?;
            after_mutation(&api, &DataEvent::Deleted(Entity::User))?;
        }

        UserAction::Emails => {
            let emails = api.user_emails()?;
            if emails.is_empty() {
                info("No e-mail addresses registered.");
            }
            for email in emails {
                println!("{email}");
            }
        }
    }

    Ok(())
}

/// Create when no id is given, update otherwise.
fn save(api: &ApiClient, id: Option<&str>, payload: &UserPayload) -> AppResult<()> {
    let event = match id {
        Some(id) => {
            api.update_user(id, payload)?;
            DataEvent::Updated(Entity::User)
        }
        None => {
            api.create_user(payload)?;
            DataEvent::Created(Entity::User)
        }
    };
    after_mutation(api, &event)?;
    Ok(())
}

fn find_user(api: &ApiClient, id: &str) -> AppResult<User> {
    api.users()?
        .into_iter()
        .find(|u| u.id == id)
        .ok_or_else(|| AppError::NotFound(format!("user '{id}'")))
}

fn non_empty(value: &str, field: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("the user {field} cannot be empty")));
    }
    Ok(value.to_string())
}

pub(crate) fn print_users(users: &[User]) {
    if users.is_empty() {
        info("No users found.");
        return;
    }

    let mut table = Table::auto(&["ID", "Name", "Email", "Role"]);
    for u in users {
        table.push_fit(vec![
            u.id.clone(),
            u.name.clone(),
            u.email.clone(),
            u.role.as_str().to_string(),
        ]);
    }
    print!("{}", table.render());
}
