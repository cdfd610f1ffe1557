use crate::domain::{
    Credentials, FlowError, NewCelebration, NewWishlist, SessionStore, WishlistApi,
};
use crate::interface_adapters::document::{Document, Page, ids};
use crate::interface_adapters::render::{render_celebrations, render_wishlists};
use crate::use_cases::{
    CreateCelebrationUseCase, CreateWishlistUseCase, LoadDashboardUseCase, LogInUseCase,
    LogoutUseCase, SignUpUseCase,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    SignUp,
    LogIn,
    NewWishlist,
    NewCelebration,
}

impl Form {
    pub fn id(self) -> &'static str {
        match self {
            Form::SignUp => ids::SIGNUP_FORM,
            Form::LogIn => ids::LOGIN_FORM,
            Form::NewWishlist => ids::WISHLIST_FORM,
            Form::NewCelebration => ids::CELEBRATION_FORM,
        }
    }
}

// Page events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ToggleMenu,
    Submit(Form),
    PageLoad,
    Logout,
}

// Binds page events to use cases and renders their outcome into the
// document. Every failure ends as an error alert; nothing is retried.
pub struct ViewController<A, S> {
    api: A,
    session: S,
    document: Document,
}

impl<A, S> ViewController<A, S>
where
    A: WishlistApi + Clone,
    S: SessionStore + Clone,
{
    pub fn new(api: A, session: S, document: Document) -> Self {
        Self {
            api,
            session,
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub async fn handle(&mut self, event: Event) {
        tracing::debug!(?event, page = self.document.page().path(), "handling event.");
        if let Event::Submit(form) = event {
            tracing::debug!(form = form.id(), "form submitted.");
        }
        match event {
            Event::ToggleMenu => self.document.toggle_menu(),
            Event::Submit(Form::SignUp) => self.sign_up().await,
            Event::Submit(Form::LogIn) => self.log_in().await,
            Event::Submit(Form::NewWishlist) => self.create_wishlist().await,
            Event::Submit(Form::NewCelebration) => self.create_celebration().await,
            Event::PageLoad => self.on_page_load().await,
            Event::Logout => self.logout(),
        }
    }

    // Only the dashboard loads data on arrival.
    pub async fn on_page_load(&mut self) {
        if self.document.page() == Page::Dashboard {
            self.load_dashboard().await;
        }
    }

    #[tracing::instrument(name = "sign_up_flow", skip_all)]
    async fn sign_up(&mut self) {
        let credentials = self.credentials(ids::USERNAME, ids::PASSWORD);
        let use_case = SignUpUseCase {
            api: self.api.clone(),
        };

        match use_case.execute(credentials).await {
            Ok(_) => {
                tracing::info!("user registered.");
                self.document.alert_info("User registered successfully!");
                self.document.navigate(Page::SignIn);
            }
            Err(err) => self.fail(err.into()),
        }
    }

    #[tracing::instrument(name = "log_in_flow", skip_all)]
    async fn log_in(&mut self) {
        let credentials = self.credentials(ids::LOGIN_USERNAME, ids::LOGIN_PASSWORD);
        let use_case = LogInUseCase {
            api: self.api.clone(),
            session: self.session.clone(),
        };

        match use_case.execute(credentials).await {
            Ok(()) => {
                tracing::info!("logged in.");
                self.document.alert_info("Login successful!");
                self.document.navigate(Page::Dashboard);
            }
            Err(err) => self.fail(err),
        }
    }

    #[tracing::instrument(name = "dashboard_load", skip_all)]
    pub async fn load_dashboard(&mut self) {
        let use_case = LoadDashboardUseCase {
            api: self.api.clone(),
            session: self.session.clone(),
        };

        let data = match use_case.execute().await {
            Ok(data) => data,
            Err(err) => return self.fail(err.into()),
        };

        // Each container is updated from its own result only.
        match data.wishlists {
            Ok(wishlists) => {
                tracing::debug!(count = wishlists.len(), "wishlists loaded.");
                self.document
                    .replace_children(ids::WISHLIST_CONTAINER, render_wishlists(&wishlists));
            }
            Err(err) => self.fail(err.into()),
        }
        match data.celebrations {
            Ok(celebrations) => {
                tracing::debug!(count = celebrations.len(), "celebrations loaded.");
                self.document.replace_children(
                    ids::CELEBRATION_CONTAINER,
                    render_celebrations(&celebrations),
                );
            }
            Err(err) => self.fail(err.into()),
        }
    }

    #[tracing::instrument(name = "create_wishlist_flow", skip_all)]
    async fn create_wishlist(&mut self) {
        let wishlist = NewWishlist {
            name: self.document.input_value(ids::WISHLIST_NAME).to_string(),
        };
        let use_case = CreateWishlistUseCase {
            api: self.api.clone(),
            session: self.session.clone(),
        };

        match use_case.execute(wishlist).await {
            Ok(created) => {
                tracing::info!(name = %created.name, "wishlist created.");
                self.document.alert_info("Wishlist created!");
                self.load_dashboard().await;
            }
            Err(err) => self.fail(err),
        }
    }

    #[tracing::instrument(name = "create_celebration_flow", skip_all)]
    async fn create_celebration(&mut self) {
        let celebration = NewCelebration {
            title: self.document.input_value(ids::CELEBRATION_TITLE).to_string(),
            date: self.document.input_value(ids::CELEBRATION_DATE).to_string(),
        };
        let use_case = CreateCelebrationUseCase {
            api: self.api.clone(),
            session: self.session.clone(),
        };

        match use_case.execute(celebration).await {
            Ok(created) => {
                tracing::info!(title = %created.title, "celebration created.");
                self.document.alert_info("Celebration created!");
                self.load_dashboard().await;
            }
            Err(err) => self.fail(err),
        }
    }

    fn logout(&mut self) {
        let use_case = LogoutUseCase {
            session: self.session.clone(),
        };

        match use_case.execute() {
            Ok(()) => {
                tracing::info!("logged out.");
                self.document.alert_info("Logged out successfully!");
                self.document.navigate(Page::SignIn);
            }
            Err(err) => self.fail(err.into()),
        }
    }

    fn credentials(&self, username_id: &str, password_id: &str) -> Credentials {
        Credentials::new(
            self.document.input_value(username_id),
            self.document.input_value(password_id),
        )
    }

    fn fail(&mut self, err: FlowError) {
        tracing::error!(error = %err, "action failed.");
        self.document.alert_error(err.to_string());
    }
}
