//! Health-check handlers for the container runtime.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can it serve traffic? Failure → pulled from the load balancer. |
//!
//! Neither probe calls the upstream API. A NASA outage turns every proxied
//! route into a `500`, but restarting the proxy would not fix it.

use crate::{Request, Response};

/// Always `200 OK` with body `"ok"`.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"` once the router is serving.
pub async fn readiness(_req: Request) -> Response {
    Response::text("ready")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn probes_answer_without_dependencies() {
        assert_eq!(liveness(Request::get("/healthz")).await.body().as_ref(), b"ok");
        assert_eq!(readiness(Request::get("/readyz")).await.body().as_ref(), b"ready");
    }
}
