use crate::system::settings::context::use_settings;
use contracts::enums::{SmsProvider, WeatherProvider};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn IntegrationsTab() -> impl IntoView {
    let settings = use_settings();
    let current = settings.config.with_untracked(|c| c.integrations);
    let sms_provider = RwSignal::new(current.sms_provider.code().to_string());
    let weather_provider = RwSignal::new(current.weather_provider.code().to_string());
    let api_key = RwSignal::new(String::new());

    Effect::new(move |_| {
        let sms = SmsProvider::from_code(&sms_provider.get());
        let weather = WeatherProvider::from_code(&weather_provider.get());
        if let (Some(sms), Some(weather)) = (sms, weather) {
            settings.config.update(|c| {
                c.integrations.sms_provider = sms;
                c.integrations.weather_provider = weather;
            });
        }
    });

    let on_test_connection = move |_| {
        log::info!(
            "test connection requested for {} / {}",
            sms_provider.get_untracked(),
            weather_provider.get_untracked()
        );
    };

    view! {
        <div class="admin-grid">
            <div class="card">
                <div class="card__header"><h3>"SMS Gateway"</h3></div>
                <div class="card__body">
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form__group">
                            <label class="form__label">"Provider"</label>
                            <Select value=sms_provider>
                                {SmsProvider::all().into_iter().map(|p| view! {
                                    <option value=p.code()>{p.display_name()}</option>
                                }).collect_view()}
                            </Select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"API Key"</label>
                            <Input value=api_key placeholder="Enter API key" input_type=InputType::Password />
                        </div>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_test_connection>
                            "Test Connection"
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="card">
                <div class="card__header"><h3>"Weather Data"</h3></div>
                <div class="card__body">
                    <div class="form__group">
                        <label class="form__label">"Provider"</label>
                        <Select value=weather_provider>
                            {WeatherProvider::all().into_iter().map(|p| view! {
                                <option value=p.code()>{p.display_name()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                </div>
            </div>
        </div>
    }
}
