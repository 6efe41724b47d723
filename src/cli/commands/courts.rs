use crate::api::ApiClient;
use crate::cli::commands::{after_mutation, connect_logged_in, password_or_prompt, require_admin};
use crate::cli::parser::{CourtAction, Commands, PricingArgs};
use crate::config::Config;
use crate::core::events::{DataEvent, Entity};
use crate::errors::{AppError, AppResult};
use crate::models::{Court, CourtPayload, Pricing};
use crate::ui::messages::{header, info};
use crate::ui::prompt::{ask_confirmation, ask_yes_no};
use crate::utils::colors::normalize_hex;
use crate::utils::format_currency;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Courts { action } = cmd else {
        return Ok(());
    };

    let (api, session) = connect_logged_in(cfg)?;

    match action {
        CourtAction::List => print_courts(&api.courts()?),

        CourtAction::Add {
            name,
            color,
            pricing,
            original,
            no_original,
        } => {
            require_admin(&session, "create courts")?;
            let mut payload = CourtPayload {
                name: Some(valid_name(name)?),
                color: Some(valid_color(color)?),
                pricing: Some(merge_pricing(Pricing::default(), pricing)?),
                create_original: None,
            };

            payload.create_original = Some(if *original {
                true
            } else if *no_original {
                false
            } else {
                ask_yes_no("Also create a restricted original copy of this court?")
            });
            save(&api, None, &payload)?;
        }

        CourtAction::Edit {
            id,
            name,
            color,
            pricing,
        } => {
            require_admin(&session, "edit courts")?;
            let current = api.court(id)?;

            let payload = CourtPayload {
                name: name.as_deref().map(valid_name).transpose()?,
                color: color.as_deref().map(valid_color).transpose()?,
                pricing: if pricing.is_empty() {
                    None
                } else {
                    Some(merge_pricing(current.pricing_or_default(), pricing)?)
                },
                create_original: None,
            };
            save(&api, Some(&current.id), &payload)?;
        }

        CourtAction::Del { id, yes } => {
            require_admin(&session, "delete courts")?;
            let court = api.court(id)?;
            let prompt = format!("Delete court '{}'? Its bookings will no longer be reachable.", court.name);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
            api.delete_court(&court.id)?;
            after_mutation(&api, &DataEvent::Deleted(Entity::Court))?;
        }

        CourtAction::Originals { password } => {
            require_admin(&session, "view original courts")?;
            let password = password_or_prompt(password)?;
            api.re_auth(&password)?;
            header("Original courts");
            print_courts(&api.original_courts()?);
        }
    }

    Ok(())
}

/// Create when no id is given, update otherwise.
fn save(api: &ApiClient, id: Option<&str>, payload: &CourtPayload) -> AppResult<()> {
    let event = match id {
        Some(id) => {
            api.update_court(id, payload)?;
            DataEvent::Updated(Entity::Court)
        }
        None => {
            api.create_court(payload)?;
            DataEvent::Created(Entity::Court)
        }
    };
    after_mutation(api, &event)?;
    Ok(())
}

fn valid_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("the court name cannot be empty".into()));
    }
    Ok(name.to_string())
}

fn valid_color(color: &str) -> AppResult<String> {
    normalize_hex(color)
        .ok_or_else(|| AppError::Validation(format!("'{color}' is not a #RRGGBB color")))
}

/// Apply the given band prices over `base`. Prices cannot be negative.
pub(crate) fn merge_pricing(base: Pricing, args: &PricingArgs) -> AppResult<Pricing> {
    let pick = |given: Option<f64>, current: f64, band: &str| -> AppResult<f64> {
        let price = given.unwrap_or(current);
        if price < 0.0 || !price.is_finite() {
            return Err(AppError::Validation(format!(
                "the {band} price cannot be negative"
            )));
        }
        Ok(price)
    };

    Ok(Pricing {
        six_am: pick(args.six_am, base.six_am, "6:00")?,
        seven_to_fifteen: pick(args.seven_to_fifteen, base.seven_to_fifteen, "7:00 - 15:00")?,
        sixteen_to_twenty_one: pick(
            args.sixteen_to_twenty_one,
            base.sixteen_to_twenty_one,
            "16:00 - 21:00",
        )?,
        twenty_two: pick(args.twenty_two, base.twenty_two, "22:00")?,
        twenty_three: pick(args.twenty_three, base.twenty_three, "23:00")?,
    })
}

pub(crate) fn print_courts(courts: &[Court]) {
    if courts.is_empty() {
        info("No courts found.");
        return;
    }

    let mut table = Table::auto(&["ID", "Name", "Color", "6:00", "7-15", "16-21", "22:00", "23:00"]);
    for c in courts {
        let mut row = vec![c.id.clone(), c.name.clone(), c.color.clone()];
        match &c.pricing {
            Some(p) => row.extend(p.bands().iter().map(|(_, price)| format_currency(*price))),
            None => row.extend(std::iter::repeat_n("-".to_string(), 5)),
        }
        table.push_fit(row);
    }
    print!("{}", table.render());
}
