//! Shared test fixtures.

use crate::content::NewsItem;
use crate::element::{ContainerProps, Element, ElementPayload, TextProps};
use kurbo::{Point, Size};
use std::future::Future;

/// Simple blocking executor for the boxed futures in tests.
pub fn block_on<F: Future>(f: F) -> F::Output {
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}

pub fn sample_items(count: usize) -> Vec<NewsItem> {
    (0..count)
        .map(|i| NewsItem {
            id: i.to_string(),
            title: format!("Title {i}"),
            description: format!("Description {i}"),
            source_url: format!("https://example.com/{i}"),
            discussion_url: format!("https://news.hada.io/topic?id={i}"),
        })
        .collect()
}

pub fn text(id: &str) -> Element {
    Element::new(
        id,
        Point::new(0.0, 0.0),
        Size::new(100.0, 40.0),
        ElementPayload::Text(TextProps::new(id)),
    )
}

pub fn container(id: &str) -> Element {
    Element::new(
        id,
        Point::new(10.0, 10.0),
        Size::new(100.0, 100.0),
        ElementPayload::Container(ContainerProps::filled("white")),
    )
}
