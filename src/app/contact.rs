use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::{
    config::SiteConfig,
    contact::{ContactClient, ContactForm, ContactPayload},
    content::{CONTACT_DETAILS, SOCIAL_LINKS},
};

use super::{animate::use_animations, section::SectionHeading, toaster::use_toasts};

#[derive(Clone, Copy)]
struct Fields {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    subject: RwSignal<String>,
    message: RwSignal<String>,
    pending: RwSignal<bool>,
}

impl Fields {
    fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            pending: RwSignal::new(false),
        }
    }

    fn form(&self) -> ContactForm {
        ContactForm {
            fields: ContactPayload {
                first_name: self.first_name.get_untracked(),
                last_name: self.last_name.get_untracked(),
                email: self.email.get_untracked(),
                subject: self.subject.get_untracked(),
                message: self.message.get_untracked(),
            },
            pending: self.pending.get_untracked(),
        }
    }

    fn set(&self, form: ContactForm) {
        let ContactForm {
            fields:
                ContactPayload {
                    first_name,
                    last_name,
                    email,
                    subject,
                    message,
                },
            pending,
        } = form;
        self.first_name.set(first_name);
        self.last_name.set(last_name);
        self.email.set(email);
        self.subject.set(subject);
        self.message.set(message);
        self.pending.set(pending);
    }
}

#[component]
fn Field(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium mb-2 block">{label}</span>
            <input
                type=kind
                name=label
                required
                placeholder=placeholder
                class="w-full h-10 px-3 rounded-md border border-input bg-background transition-all focus:scale-[1.02] focus:outline-none focus:ring-2 focus:ring-ring"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let (node, animate) = use_animations::<html::Div>();
    let (details, details_anim) = use_animations::<html::Div>();
    Effect::new(move |_| {
        if node.get().is_some() {
            animate.slide_up(None);
        }
    });
    Effect::new(move |_| {
        if details.get().is_some() {
            details_anim.stagger_children(None);
        }
    });

    view! {
        <div node_ref=node class="space-y-8">
            <div>
                <h3 class="text-2xl font-bold mb-6">"Get In Touch"</h3>
                <p class="text-muted-foreground mb-8 leading-relaxed">
                    "I'm always interested in new opportunities and exciting projects. Whether you need a data-driven web application or want to discuss your next big idea, I'd love to hear from you."
                </p>
            </div>
            <div node_ref=details class="space-y-4">
                {CONTACT_DETAILS
                    .iter()
                    .map(|detail| {
                        view! {
                            <div class="flex items-center gap-4 p-4 rounded-lg hover:bg-muted transition-colors">
                                <div class="w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center text-xl">
                                    {detail.icon}
                                </div>
                                <div>
                                    <p class="font-medium">{detail.label}</p>
                                    <p class="text-muted-foreground">{detail.value}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4 pt-6">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| view! { <SocialButton href=link.href label=link.label icon_class=link.icon_class /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SocialButton(href: &'static str, label: &'static str, icon_class: &'static str) -> impl IntoView {
    let (node, animate) = use_animations::<html::A>();
    Effect::new(move |_| {
        if node.get().is_some() {
            animate.hover_scale(Some(1.1));
        }
    });

    view! {
        <a
            node_ref=node
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="w-10 h-10 inline-flex items-center justify-center rounded-md border border-border"
        >
            <i class=format!("{icon_class} text-xl")></i>
        </a>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = use_toasts();
    let fields = Fields::new();
    let client = ContactClient::new(config.contact_endpoint);

    let send = Action::new_local(move |payload: &ContactPayload| {
        let client = client.clone();
        let payload = payload.clone();
        async move { client.submit(&payload).await }
    });
    // the effect dies with the component, so late results are dropped
    Effect::new(move |_| {
        send.value().with(|outcome| {
            let Some(outcome) = outcome else {
                return;
            };
            let mut form = fields.form();
            let notice = form.apply_outcome(outcome);
            match outcome {
                Ok(()) => log::info!("contact message delivered"),
                Err(e) => log::error!("contact submission failed: {e}"),
            }
            fields.set(form);
            toasts.notify(notice.kind, notice.title, Some(notice.description));
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut form = fields.form();
        let Some(payload) = form.begin_submit() else {
            return;
        };
        fields.set(form);
        send.dispatch(payload);
    };

    view! {
        <section class="py-20 px-4 bg-muted/50">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading
                    lead="Let's"
                    accent="Connect"
                    blurb="Ready to bring your next project to life with precision and expertise. Let's discuss how we can build something amazing together."
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <ContactInfo />
                    <div class="rounded-lg bg-card text-card-foreground border shadow-sm">
                        <form class="p-8 space-y-6" on:submit=on_submit>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <Field label="First Name" placeholder="John" value=fields.first_name />
                                <Field label="Last Name" placeholder="Doe" value=fields.last_name />
                            </div>
                            <Field
                                label="Email"
                                kind="email"
                                placeholder="john@example.com"
                                value=fields.email
                            />
                            <Field label="Subject" placeholder="Project Discussion" value=fields.subject />
                            <label class="block">
                                <span class="text-sm font-medium mb-2 block">"Message"</span>
                                <textarea
                                    name="message"
                                    required
                                    placeholder="Tell me about your project..."
                                    class="w-full min-h-[120px] px-3 py-2 rounded-md border border-input bg-background transition-all focus:scale-[1.02] focus:outline-none focus:ring-2 focus:ring-ring"
                                    prop:value=move || fields.message.get()
                                    on:input=move |ev| fields.message.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <button
                                type="submit"
                                class="w-full group inline-flex items-center justify-center h-10 px-4 rounded-md bg-primary text-primary-foreground font-medium disabled:opacity-50 disabled:pointer-events-none"
                                disabled=move || fields.pending.get()
                            >
                                <span class="mr-2 group-hover:scale-110 transition-transform">"✉"</span>
                                {move || if fields.pending.get() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
