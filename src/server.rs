// src/server.rs

use crate::{
    fetch::Source,
    refresh::{spawn_manual, Refresher},
    render::{html::render_page, SharedPage},
};
use std::{convert::Infallible, sync::Arc, time::Duration};
use tracing::info;
use warp::{http::Uri, reply::Reply, Filter, Rejection};

type SharedRefresher<S> = Arc<Refresher<S, SharedPage>>;

fn with_refresher<S: Source + 'static>(
    refresher: SharedRefresher<S>,
) -> impl Filter<Extract = (SharedRefresher<S>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&refresher))
}

async fn index<S: Source>(
    refresher: SharedRefresher<S>,
    reload_every: Duration,
) -> Result<impl Reply, Rejection> {
    let page = refresher.display().snapshot();
    Ok(warp::reply::html(render_page(&page, reload_every)))
}

async fn manual_refresh<S: Source + 'static>(
    refresher: SharedRefresher<S>,
) -> Result<impl Reply, Rejection> {
    info!("manual refresh requested");
    // the task runs detached; the response only waits for the loading row
    let _ = spawn_manual(refresher);
    Ok(warp::redirect::see_other(Uri::from_static("/")))
}

async fn snapshot<S: Source>(refresher: SharedRefresher<S>) -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&refresher.display().snapshot()))
}

async fn health_check<S: Source>(refresher: SharedRefresher<S>) -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "flowboard",
        "state": refresher.state().as_str(),
    })))
}

/// `GET /`, `POST /refresh`, `GET /api/snapshot`, `GET /health`.
pub fn routes<S: Source + 'static>(
    refresher: SharedRefresher<S>,
    reload_every: Duration,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .and(with_refresher(Arc::clone(&refresher)))
        .and_then(move |r: SharedRefresher<S>| index(r, reload_every));

    let refresh = warp::path("refresh")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_refresher(Arc::clone(&refresher)))
        .and_then(manual_refresh::<S>);

    let snapshot = warp::path!("api" / "snapshot")
        .and(warp::get())
        .and(with_refresher(Arc::clone(&refresher)))
        .and_then(snapshot::<S>);

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_refresher(refresher))
        .and_then(health_check::<S>);

    index.or(refresh).or(snapshot).or(health)
}
