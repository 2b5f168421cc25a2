//! User Lifecycle
//!
//! This example walks a user account through registration, payment, an
//! abuse report and its resolution.
//!
//! Key concepts:
//! - Account tiers as states (Guest -> Free -> Premium, Locked)
//! - One rule per source state for each transition
//! - Entry hooks for welcome emails and account locks
//! - Membership data kept in a typed context beside the machine
//!
//! Run with: RUST_LOG=debug cargo run --example user_lifecycle

use chrono::{DateTime, Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use waypoint::{
    state_enum, transition_enum, HandlerError, Params, StateMachine, TransitionFailed,
    TransitionRules,
};

state_enum! {
    enum Tier {
        Guest,
        Free,
        Premium,
        Locked,
    }
}

transition_enum! {
    enum AccountEvent {
        Register,
        Unregister,
        PaymentReceived,
        PaymentLapsed,
        AbuseReported,
        AbuseResolved,
    }
}

#[derive(Default)]
struct Membership {
    premium: bool,
    expires: Option<DateTime<Utc>>,
    lapsed_payments: u32,
    locked: bool,
}

fn report_abuse(_: &mut Membership, params: &Params) -> Result<Tier, HandlerError> {
    let reason = params.require_str("reason")?;
    tracing::info!(reason, "Abuse has been reported");
    Ok(Tier::Locked)
}

fn unregister(m: &mut Membership, params: &Params) -> Result<Tier, HandlerError> {
    let id = params.require_f64("id")?;
    tracing::info!(id, "Deleting user record");
    *m = Membership::default();
    Ok(Tier::Guest)
}

fn account_machine() -> StateMachine<Tier, AccountEvent, Membership> {
    StateMachine::builder()
        .initial(Tier::Guest)
        .allow(Tier::Guest, [AccountEvent::Register])
        .allow(
            Tier::Free,
            [
                AccountEvent::Unregister,
                AccountEvent::PaymentReceived,
                AccountEvent::AbuseReported,
            ],
        )
        .allow(
            Tier::Premium,
            [
                AccountEvent::Unregister,
                AccountEvent::PaymentReceived,
                AccountEvent::PaymentLapsed,
                AccountEvent::AbuseReported,
            ],
        )
        .allow(
            Tier::Locked,
            [AccountEvent::PaymentReceived, AccountEvent::AbuseResolved],
        )
        .on(
            AccountEvent::Register,
            TransitionRules::new().from(Tier::Guest, |_: &mut Membership, params: &Params| {
                let email = params.require_str("email")?;
                tracing::info!(email, "Storing user record");
                Ok(Tier::Free)
            }),
        )
        .on(
            AccountEvent::Unregister,
            TransitionRules::new()
                .from(Tier::Free, unregister)
                .from(Tier::Premium, unregister),
        )
        .on(
            AccountEvent::PaymentReceived,
            TransitionRules::new()
                .from(Tier::Free, |m: &mut Membership, _: &Params| {
                    tracing::info!("Received first payment, upgrading membership");
                    m.premium = true;
                    m.expires = Some(Utc::now() + Duration::days(365));
                    Ok(Tier::Premium)
                })
                .from(Tier::Premium, |m: &mut Membership, _: &Params| {
                    tracing::info!("Received renewal payment, extending membership");
                    m.expires = Some(m.expires.unwrap_or_else(Utc::now) + Duration::days(365));
                    Ok(Tier::Premium)
                })
                .from(Tier::Locked, |m: &mut Membership, _: &Params| {
                    tracing::info!("Received payment on a locked account");
                    m.premium = true;
                    m.expires = Some(m.expires.unwrap_or_else(Utc::now) + Duration::days(365));
                    Ok(Tier::Locked)
                }),
        )
        .on(
            AccountEvent::PaymentLapsed,
            TransitionRules::new().from(Tier::Premium, |m: &mut Membership, _: &Params| {
                m.lapsed_payments += 1;
                m.premium = false;
                Ok(Tier::Free)
            }),
        )
        .on(
            AccountEvent::AbuseReported,
            TransitionRules::new()
                .from(Tier::Free, report_abuse)
                .from(Tier::Premium, report_abuse),
        )
        .on(
            AccountEvent::AbuseResolved,
            TransitionRules::new().from(Tier::Locked, |m: &mut Membership, params: &Params| {
                let reason = params.require_str("reason")?;
                if m.premium {
                    tracing::info!(reason, "Abuse resolved, restoring premium membership");
                    Ok(Tier::Premium)
                } else {
                    tracing::info!(reason, "Abuse resolved, restoring free membership");
                    Ok(Tier::Free)
                }
            }),
        )
        .on_enter_noop(Tier::Guest)
        .on_enter(Tier::Free, |_: &Tier, m: &mut Membership, params: &Params| {
            m.locked = false;
            if let Some(email) = params.str("email") {
                tracing::info!(email, "Sending welcome email");
            }
            Ok(())
        })
        .on_enter(Tier::Premium, |_: &Tier, m: &mut Membership, _: &Params| {
            m.locked = false;
            Ok(())
        })
        .on_enter(Tier::Locked, |_: &Tier, m: &mut Membership, _: &Params| {
            m.locked = true;
            tracing::warn!("Account has been locked");
            Ok(())
        })
        .build()
        .expect("account machine is consistent")
}

struct User {
    machine: StateMachine<Tier, AccountEvent, Membership>,
    membership: Membership,
}

impl User {
    fn new() -> Self {
        Self {
            machine: account_machine(),
            membership: Membership::default(),
        }
    }

    fn apply(&mut self, event: AccountEvent, params: Params) -> Result<Tier, TransitionFailed> {
        self.machine.transition(&mut self.membership, event, &params)
    }

    fn register(&mut self, email: &str, password: &str) -> Result<Tier, TransitionFailed> {
        self.apply(
            AccountEvent::Register,
            Params::new().with("email", email).with("password", password),
        )
    }

    fn payment_received(&mut self, amount: f64) -> Result<Tier, TransitionFailed> {
        self.apply(AccountEvent::PaymentReceived, Params::new().with("amount", amount))
    }

    fn abuse_reported(&mut self, reason: &str) -> Result<Tier, TransitionFailed> {
        self.apply(AccountEvent::AbuseReported, Params::new().with("reason", reason))
    }

    fn abuse_resolved(&mut self, reason: &str) -> Result<Tier, TransitionFailed> {
        self.apply(AccountEvent::AbuseResolved, Params::new().with("reason", reason))
    }
}

fn main() -> Result<(), TransitionFailed> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== User Lifecycle Example ===\n");

    let mut user = User::new();
    println!("State is: {:?}", user.machine.current_state());

    if let Err(err) = user.payment_received(15.00) {
        println!("Refused while Guest: {err} ({})", err.cause());
    }

    user.register("user@examplemail.com", "foobar")?;
    println!("State is: {:?}", user.machine.current_state());

    user.payment_received(15.00)?;
    println!("State is: {:?}", user.machine.current_state());

    user.abuse_reported("Spamming")?;
    println!("State is: {:?}", user.machine.current_state());

    user.abuse_resolved("Not spam, legitimate information broadcast")?;
    println!("State is: {:?}", user.machine.current_state());

    user.payment_received(15.00)?;
    println!("State is: {:?}", user.machine.current_state());

    if let Some(expires) = user.membership.expires {
        println!("Membership expires: {expires}");
    }
    println!(
        "Premium: {}, locked: {}, lapsed payments: {}",
        user.membership.premium, user.membership.locked, user.membership.lapsed_payments
    );

    println!("\nPath:");
    for step in user.machine.history().transitions() {
        println!("  {:?} --{}--> {:?}", step.from, step.via, step.to);
    }

    Ok(())
}
