//! AWS setup page: CloudFormation quick-create link, stack steps and the
//! role ARN submission form.

#[cfg(test)]
#[path = "aws_setup_test.rs"]
mod aws_setup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;
use crate::state::setup::SetupState;
use crate::util::auth::install_auth_gate;

/// Quick-create link for the stack that provisions the monitoring role.
pub const CLOUDFORMATION_URL: &str = "https://console.aws.amazon.com/cloudformation/home?region=us-west-1#/stacks/new?stackName=OptiCloudMonitoringRole&templateURL=https://opticloud-role-template.s3.us-west-1.amazonaws.com/OptiCloud.yml";

pub const SETUP_STEPS: [&str; 5] = [
    "Click Next on the \"Create Stack\" page.",
    "Click Next on the \"Configure Stack Options\" page.",
    "Check the box to Acknowledge IAM resource creation.",
    "Click Create Stack.",
    "Wait for stack creation to complete.",
];

#[component]
pub fn AwsSetupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let setup = RwSignal::new(SetupState::default());
    install_auth_gate(auth, use_navigate());

    let on_reveal = move |_| setup.update(SetupState::reveal);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = auth.with_untracked(|s| s.user.clone());
        let Some(role_arn) = setup.try_update(|s| s.begin_submit(user.as_ref())).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_role_arn(role_arn.as_str()).await;
            setup.update(|s| s.finish_submit(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = role_arn;
    };

    view! {
        <div class="page">
            <NavBar/>
            <main class="setup-card">
                <h1>"Set Up AWS Monitoring"</h1>
                <p>"Click below to set up AWS CloudFormation and create the required IAM role:"</p>
                <a class="setup-button" href=CLOUDFORMATION_URL target="_blank" rel="noopener noreferrer">
                    "Set Up CloudFormation Stack"
                </a>
                <p>"After clicking the link, follow these steps to create the stack:"</p>
                <ol class="setup-steps">
                    {SETUP_STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                </ol>
                <p>"Once the stack is created, copy the Role ARN from the output tab and paste it below."</p>
                <button class="setup-button setup-button--reveal" on:click=on_reveal>
                    "Set up AWS Monitoring"
                </button>
                <Show when=move || setup.with(|s| s.show_input)>
                    <form class="setup-form" on:submit=on_submit>
                        <input
                            class="setup-input"
                            type="text"
                            placeholder="Enter AWS Role ARN"
                            prop:value=move || setup.with(|s| s.role_arn.clone())
                            on:input=move |ev| setup.update(|s| s.role_arn = event_target_value(&ev))
                        />
                        <button class="setup-button" type="submit" disabled=move || setup.with(|s| s.loading)>
                            "Submit"
                        </button>
                    </form>
                </Show>
                <Show when=move || setup.with(|s| s.message.is_some())>
                    <p class="message">{move || setup.with(|s| s.message.clone().unwrap_or_default())}</p>
                </Show>
                <Show when=move || setup.with(|s| s.loading)>
                    <p class="loading">"Loading..."</p>
                </Show>
            </main>
        </div>
    }
}
