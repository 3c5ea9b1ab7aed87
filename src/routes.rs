use crate::{api::entry, config::Config};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::Condition, web};
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Helper to build the per-IP limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / u64::from(requests_per_min)).max(1);
        let cfg = GovernorConfigBuilder::default()
            .milliseconds_per_request(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("period and burst size are non-zero");
        Governor::new(&cfg)
    }

    let limit_enabled = config.rate_mutations_per_min > 0;
    let limiter = Arc::new(build_limiter(config.rate_mutations_per_min));

    // Bodies are read raw and decoded by the handlers; oversized ones get 413
    cfg.app_data(web::PayloadConfig::new(config.json_limit));

    cfg.service(web::resource("/getData").route(web::get().to(entry::get_data)))
        .service(
            web::resource("/addEntry")
                .wrap(Condition::new(limit_enabled, limiter.clone()))
                .route(web::post().to(entry::add_entry)),
        )
        .service(
            web::resource("/updateEntry/{date}")
                .wrap(Condition::new(limit_enabled, limiter.clone()))
                .route(web::put().to(entry::update_entry)),
        )
        .service(
            web::resource("/deleteEntry/{date}")
                .wrap(Condition::new(limit_enabled, limiter))
                .route(web::delete().to(entry::delete_entry)),
        );
}
