use super::state::{AdminState, ThresholdsDraft};
use crate::system::settings::context::use_settings;
use contracts::enums::BacterialThreshold;
use contracts::shared::config::{AlertSettings, AppConfig};
use leptos::prelude::*;
use thaw::*;

/// Text and toggle signals bound to the form controls
#[derive(Clone, Copy)]
struct ThresholdsForm {
    ph_min: RwSignal<String>,
    ph_max: RwSignal<String>,
    tds_max: RwSignal<String>,
    turbidity_max: RwSignal<String>,
    temperature_min: RwSignal<String>,
    temperature_max: RwSignal<String>,
    bacterial: RwSignal<String>,
    risk_threshold: RwSignal<String>,
    sms: RwSignal<bool>,
    ivr: RwSignal<bool>,
    chatbot: RwSignal<bool>,
    email: RwSignal<bool>,
}

impl ThresholdsForm {
    fn new(config: &AppConfig) -> Self {
        let form = Self {
            ph_min: RwSignal::new(String::new()),
            ph_max: RwSignal::new(String::new()),
            tds_max: RwSignal::new(String::new()),
            turbidity_max: RwSignal::new(String::new()),
            temperature_min: RwSignal::new(String::new()),
            temperature_max: RwSignal::new(String::new()),
            bacterial: RwSignal::new(String::new()),
            risk_threshold: RwSignal::new(String::new()),
            sms: RwSignal::new(false),
            ivr: RwSignal::new(false),
            chatbot: RwSignal::new(false),
            email: RwSignal::new(false),
        };
        form.fill(config);
        form
    }

    fn fill(&self, config: &AppConfig) {
        let draft = ThresholdsDraft::from_config(&config.thresholds, &config.alerts);
        self.ph_min.set(draft.ph_min);
        self.ph_max.set(draft.ph_max);
        self.tds_max.set(draft.tds_max);
        self.turbidity_max.set(draft.turbidity_max);
        self.temperature_min.set(draft.temperature_min);
        self.temperature_max.set(draft.temperature_max);
        self.bacterial.set(draft.bacterial);
        self.risk_threshold.set(draft.risk_threshold);
        self.sms.set(config.alerts.sms_enabled);
        self.ivr.set(config.alerts.ivr_enabled);
        self.chatbot.set(config.alerts.chatbot_enabled);
        self.email.set(config.alerts.email_enabled);
    }

    fn draft(&self) -> ThresholdsDraft {
        ThresholdsDraft {
            ph_min: self.ph_min.get_untracked(),
            ph_max: self.ph_max.get_untracked(),
            tds_max: self.tds_max.get_untracked(),
            turbidity_max: self.turbidity_max.get_untracked(),
            temperature_min: self.temperature_min.get_untracked(),
            temperature_max: self.temperature_max.get_untracked(),
            bacterial: self.bacterial.get_untracked(),
            risk_threshold: self.risk_threshold.get_untracked(),
        }
    }
}

const NOTIFICATION_CHANNELS: [(&str, &str); 4] = [
    ("SMS Alerts", "Send alerts via SMS to registered numbers"),
    ("IVR Calls", "Automated voice calls in local languages"),
    ("Chatbot Notifications", "Push alerts through the community chatbot"),
    ("Email Reports", "Daily summary reports to health officials"),
];

#[component]
pub fn ThresholdsTab(state: RwSignal<AdminState>) -> impl IntoView {
    let settings = use_settings();
    let form = ThresholdsForm::new(&settings.config.get_untracked());
    let switches = [form.sms, form.ivr, form.chatbot, form.email];

    let on_save = move |_| {
        let draft = form.draft();
        let result = draft.thresholds().and_then(|thresholds| {
            let alerts = AlertSettings {
                risk_threshold: draft.risk_threshold()?,
                sms_enabled: form.sms.get_untracked(),
                ivr_enabled: form.ivr.get_untracked(),
                chatbot_enabled: form.chatbot.get_untracked(),
                email_enabled: form.email.get_untracked(),
            };
            let integrations = settings.config.with_untracked(|c| c.integrations);
            settings.save(thresholds, alerts, integrations)
        });
        match result {
            Ok(()) => state.update(|s| {
                s.last_error = None;
                s.saved = true;
            }),
            Err(e) => {
                log::warn!("threshold settings rejected: {}", e);
                state.update(|s| {
                    s.last_error = Some(e);
                    s.saved = false;
                });
            }
        }
    };

    let on_reset = move |_| {
        settings.reset();
        form.fill(&settings.config.get_untracked());
        state.update(|s| {
            s.last_error = None;
            s.saved = false;
        });
    };

    let number_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <Input value=value />
            </div>
        }
    };

    view! {
        <div class="admin-grid">
            <div class="card">
                <div class="card__header">
                    <h3>"Water Quality Thresholds"</h3>
                    <p class="text-muted">"Limits based on BIS/WHO drinking water standards"</p>
                </div>
                <div class="card__body">
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form__row">
                            {number_field("pH Minimum", form.ph_min)}
                            {number_field("pH Maximum", form.ph_max)}
                        </div>
                        {number_field("TDS Maximum (ppm)", form.tds_max)}
                        {number_field("Turbidity Maximum (NTU)", form.turbidity_max)}
                        <div class="form__row">
                            {number_field("Temperature Minimum (°C)", form.temperature_min)}
                            {number_field("Temperature Maximum (°C)", form.temperature_max)}
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Bacterial Contamination"</label>
                            <Select value=form.bacterial>
                                {BacterialThreshold::all().into_iter().map(|b| view! {
                                    <option value=b.code()>{b.display_name()}</option>
                                }).collect_view()}
                            </Select>
                        </div>
                    </Flex>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3>"Alert Configuration"</h3>
                </div>
                <div class="card__body">
                    <Flex vertical=true gap=FlexGap::Medium>
                        {number_field("Risk Threshold (%)", form.risk_threshold)}
                        {NOTIFICATION_CHANNELS.into_iter().zip(switches).map(|((label, description), checked)| view! {
                            <div class="setting-row">
                                <div>
                                    <div class="setting-row__label">{label}</div>
                                    <div class="setting-row__description">{description}</div>
                                </div>
                                <Switch checked=checked />
                            </div>
                        }).collect_view()}
                    </Flex>
                </div>
            </div>
        </div>

        {move || state.with(|s| s.last_error.clone()).map(|err| view! {
            <div class="warning-box">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{err.to_string()}</span>
            </div>
        })}
        <Show when=move || state.with(|s| s.saved)>
            <div class="info-box">"Settings saved"</div>
        </Show>

        <Space>
            <Button appearance=ButtonAppearance::Primary on_click=on_save>
                "Save Changes"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=on_reset>
                "Reset to Defaults"
            </Button>
        </Space>
    }
}
