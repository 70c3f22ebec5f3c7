//! Integration tests for [`telegram_bot::HandlerChain`].
//!
//! Covers: before/after order, before stopping the chain, Reply stopping the chain and being
//! passed to after, and the Ignore result when no handler claims the event.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use telegram_bot::{Handler, HandlerChain, HandlerResponse, Message};

/// **Test: before and after run once; handle runs once; result is Continue.**
#[tokio::test]
async fn test_handler_chain_with_handler() {
    let before_count = Arc::new(AtomicUsize::new(0));
    let after_count = Arc::new(AtomicUsize::new(0));
    let handle_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(TestBeforeAfterHandler {
            before_count: before_count.clone(),
            after_count: after_count.clone(),
        }))
        .add_handler(Arc::new(TestHandler {
            handle_count: handle_count.clone(),
        }));

    let result = chain.handle(&Message::text(1, 2, "test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(before_count.load(Ordering::SeqCst), 1);
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
    assert_eq!(after_count.load(Ordering::SeqCst), 1);
}

/// **Test: before returning false stops the chain; handle is not run.**
#[tokio::test]
async fn test_handler_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> telegram_bot::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(TestHandler {
            handle_count: handle_count.clone(),
        }));

    let result = chain.handle(&Message::text(1, 2, "test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: Reply stops the handle phase; later handlers do not run; after sees the reply.**
#[tokio::test]
async fn test_reply_stops_chain_and_passes_to_after() {
    struct ReplyHandler;

    #[async_trait::async_trait]
    impl Handler for ReplyHandler {
        async fn handle(&self, _message: &Message) -> telegram_bot::Result<HandlerResponse> {
            Ok(HandlerResponse::Reply("table".to_string()))
        }
    }

    struct CaptureHandler {
        seen: Arc<std::sync::Mutex<Option<HandlerResponse>>>,
    }

    #[async_trait::async_trait]
    impl Handler for CaptureHandler {
        async fn after(
            &self,
            _message: &Message,
            response: &HandlerResponse,
        ) -> telegram_bot::Result<()> {
            *self.seen.lock().unwrap() = Some(response.clone());
            Ok(())
        }
    }

    let seen = Arc::new(std::sync::Mutex::new(None));
    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureHandler { seen: seen.clone() }))
        .add_handler(Arc::new(ReplyHandler))
        .add_handler(Arc::new(TestHandler {
            handle_count: handle_count.clone(),
        }));

    let result = chain.handle(&Message::text(1, 2, "test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("table".to_string()));
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
    assert_eq!(
        *seen.lock().unwrap(),
        Some(HandlerResponse::Reply("table".to_string()))
    );
}

/// **Test: when every handler ignores the event the chain result is Ignore.**
#[tokio::test]
async fn test_all_ignored_yields_ignore() {
    struct IgnoreHandler;

    #[async_trait::async_trait]
    impl Handler for IgnoreHandler {
        async fn handle(&self, _message: &Message) -> telegram_bot::Result<HandlerResponse> {
            Ok(HandlerResponse::Ignore)
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(IgnoreHandler))
        .add_handler(Arc::new(IgnoreHandler));

    let result = chain.handle(&Message::text(1, 2, "hello")).await.unwrap();

    assert_eq!(result, HandlerResponse::Ignore);
    assert_eq!(chain.len(), 2);
}

/// **Test: before hooks run in order, after hooks in reverse.**
#[tokio::test]
async fn test_multiple_handlers_executed_in_order() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    struct OrderHandler {
        name: &'static str,
        order: Arc<std::sync::Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _message: &Message) -> telegram_bot::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(
            &self,
            _message: &Message,
            _response: &HandlerResponse,
        ) -> telegram_bot::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first",
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second",
            order: order.clone(),
        }));

    chain.handle(&Message::text(1, 2, "test")).await.unwrap();

    assert_eq!(
        *order.lock().unwrap(),
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

// --- Helpers used by tests ---

/// **Test: an empty chain leaves the event unhandled (Continue), driven without a runtime macro.**
#[test]
fn test_empty_chain_continues() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());

    let result = tokio_test::block_on(chain.handle(&Message::text(1, 2, "/states"))).unwrap();

    assert_eq!(result, HandlerResponse::Continue);
}

struct TestBeforeAfterHandler {
    before_count: Arc<AtomicUsize>,
    after_count: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Handler for TestBeforeAfterHandler {
    async fn before(&self, _message: &Message) -> telegram_bot::Result<bool> {
        self.before_count.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> telegram_bot::Result<()> {
        self.after_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct TestHandler {
    handle_count: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Handler for TestHandler {
    async fn handle(&self, _message: &Message) -> telegram_bot::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(HandlerResponse::Continue)
    }
}
