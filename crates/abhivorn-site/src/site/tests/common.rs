use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{CareersConfig, EmailConfig};
use crate::email::{
    DispatchError, EmailDispatchClient, EmailTransport, FormSend, JsonSend, ProviderResponse,
};
use crate::pages::{module_for, BuiltinPages, PageModule};
use crate::routing::{LoadError, PageId, PageLoader, PageSource, RouteTable};
use crate::site::Site;

#[derive(Clone)]
pub(super) struct Recorder {
    pub(super) json: Arc<Mutex<Vec<JsonSend>>>,
    pub(super) forms: Arc<Mutex<Vec<FormSend>>>,
    status: u16,
    text: &'static str,
}

impl Recorder {
    pub(super) fn replying(status: u16, text: &'static str) -> Self {
        Self {
            json: Arc::default(),
            forms: Arc::default(),
            status,
            text,
        }
    }

    pub(super) fn json_count(&self) -> usize {
        self.json.lock().expect("json mutex poisoned").len()
    }

    pub(super) fn form_count(&self) -> usize {
        self.forms.lock().expect("forms mutex poisoned").len()
    }

    fn reply(&self) -> ProviderResponse {
        ProviderResponse {
            status: self.status,
            text: self.text.to_string(),
        }
    }
}

#[async_trait]
impl EmailTransport for Recorder {
    async fn send_json(&self, request: JsonSend) -> Result<ProviderResponse, DispatchError> {
        self.json.lock().expect("json mutex poisoned").push(request);
        Ok(self.reply())
    }

    async fn send_form(&self, request: FormSend) -> Result<ProviderResponse, DispatchError> {
        self.forms.lock().expect("forms mutex poisoned").push(request);
        Ok(self.reply())
    }
}

pub(super) fn email_config(public_key: Option<&str>) -> EmailConfig {
    EmailConfig {
        service_id: "service_site".to_string(),
        contact_template_id: "template_contact".to_string(),
        application_template_id: "template_apply".to_string(),
        public_key: public_key.map(str::to_string),
        api_base_url: "http://provider.test".to_string(),
    }
}

pub(super) fn build_site(recorder: &Recorder, careers: CareersConfig) -> Site {
    build_site_with(recorder, Some("pk_test"), careers, BuiltinPages)
}

pub(super) fn build_site_with(
    recorder: &Recorder,
    public_key: Option<&str>,
    careers: CareersConfig,
    source: impl PageSource + 'static,
) -> Site {
    let client = EmailDispatchClient::new(email_config(public_key), recorder.clone());
    client.initialize();
    Site::new(
        RouteTable::standard().expect("standard routes are valid"),
        PageLoader::new(source),
        Arc::new(client),
        careers,
    )
}

/// Fails the first load of every page, then serves the built-in module.
#[derive(Default)]
pub(super) struct FlakyPages {
    calls: AtomicUsize,
}

#[async_trait]
impl PageSource for FlakyPages {
    async fn load(&self, page: PageId) -> Result<Arc<dyn PageModule>, LoadError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(LoadError::Unavailable {
                page,
                reason: "chunk fetch failed".to_string(),
            });
        }
        Ok(module_for(page))
    }
}

/// Serves the built-in modules after a fixed delay.
pub(super) struct SlowPages {
    pub(super) delay: Duration,
}

#[async_trait]
impl PageSource for SlowPages {
    async fn load(&self, page: PageId) -> Result<Arc<dyn PageModule>, LoadError> {
        tokio::time::sleep(self.delay).await;
        Ok(module_for(page))
    }
}
