use dioxus::prelude::*;

/// Static onboarding page: how to wire the bot to the backend and start
/// forwarding links.
#[component]
pub fn SetupView(user_id: String) -> Element {
    let webhook_base_url = use_hook(|| {
        std::env::var("WEBHOOK_BASE_URL")
            .or_else(|_| std::env::var("API_BASE_URL"))
            .unwrap_or_else(|_| "https://your-backend-domain.com".to_string())
    });

    rsx! {
        div { class: "setup-page",
            div { class: "setup-page-header",
                h1 { "Setup Your Social Saver Bot" }
                p { "Follow these steps to get the bot running and start saving content from social media." }
            }

            div { class: "setup-card",
                h2 { "Step 1: Environment Setup" }
                p { "Configure environment variables for the backend." }
                pre { class: "code-block",
                    "# Copy backend/.env.example to backend/.env\n"
                    "TWILIO_ACCOUNT_SID=your_account_sid\n"
                    "TWILIO_AUTH_TOKEN=your_auth_token\n"
                    "TWILIO_PHONE_NUMBER=your_bot_number\n"
                    "HF_API_TOKEN=your_hf_api_token"
                }
                a {
                    href: "https://www.twilio.com",
                    target: "_blank",
                    "Get Twilio Credentials →"
                }
            }

            div { class: "setup-card",
                h2 { "Step 2: Point the webhook at your backend" }
                p { "In the Twilio sandbox settings, set the incoming-message webhook to:" }
                pre { class: "code-block", "{webhook_base_url}/api/whatsapp/webhook" }
            }

            div { class: "setup-card",
                h2 { "Step 3: Send your first link" }
                p {
                    "Save the sandbox number in WhatsApp, then forward any Instagram, Twitter, "
                    "or blog link to it. The bot extracts the metadata, categorizes the link, "
                    "writes a summary, and it shows up on your dashboard."
                }
                p { class: "setup-note",
                    "Your User ID: "
                    code { "{user_id}" }
                }
            }
        }
    }
}
