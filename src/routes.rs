use crate::{
    api::payroll,
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / u64::from(requests_per_min)).max(1);

    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap_or_default();
    Governor::new(&cfg)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let refresh_limiter = Arc::new(build_limiter(config.rate_refresh_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(login_limiter)
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/refresh")
                    .wrap(refresh_limiter.clone())
                    .route(web::post().to(handlers::refresh_token)),
            )
            .service(
                web::resource("/logout")
                    .wrap(refresh_limiter)
                    .route(web::post().to(handlers::logout)),
            ),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(protected_limiter) // rate limiting
            .service(
                web::scope("/payroll")
                    // /payroll/periods
                    .service(
                        web::resource("/periods").route(web::get().to(payroll::list_periods)),
                    )
                    // /payroll/periods/{id}
                    .service(
                        web::resource("/periods/{id}").route(web::get().to(payroll::get_period)),
                    )
                    // /payroll/periods/{id}/status
                    .service(
                        web::resource("/periods/{id}/status")
                            .route(web::put().to(payroll::update_period_status)),
                    )
                    // /payroll/periods/{id}/summaries
                    .service(
                        web::resource("/periods/{id}/summaries")
                            .route(web::get().to(payroll::list_summaries)),
                    )
                    // /payroll/periods/{id}/dashboard
                    .service(
                        web::resource("/periods/{id}/dashboard")
                            .route(web::get().to(payroll::get_dashboard)),
                    )
                    // /payroll/dashboard/preview
                    .service(
                        web::resource("/dashboard/preview")
                            .route(web::post().to(payroll::preview_dashboard)),
                    ),
            ),
    );
}
