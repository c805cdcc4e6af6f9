//! Feed assembler
//!
//! Merges the post list, the three billboard slots and the podcast block
//! into one ordered feed. Pure and infallible: every optional input may be
//! missing and the layout compacts around it. Outside the default view the
//! first pinned post is dropped from the feed.
//!
//! Layout, with every slot present:
//!
//! ```text
//! 0 feed_first billboard
//! 1 pinned post
//! 2 image post
//! 3 feed_second billboard
//! 4 podcast block
//! 5..=8 ordinary posts
//! 9 feed_third billboard
//! 10.. remaining ordinary posts
//! ```

use crate::domain::entities::{
    BillboardSlot, Billboards, FeedItem, FeedResult, PodcastBlock, Post, TimeFrame,
};

/// Ordinary posts shown between the podcast block and the third billboard
pub const POSTS_BEFORE_THIRD_BILLBOARD: usize = 4;

#[derive(Debug, Clone, Copy)]
enum Slot {
    Billboard(BillboardSlot),
    Pinned,
    Image,
    Podcasts,
    Posts(PostRun),
}

#[derive(Debug, Clone, Copy)]
enum PostRun {
    UpTo(usize),
    Rest,
}

const FEED_LAYOUT: [Slot; 8] = [
    Slot::Billboard(BillboardSlot::FeedFirst),
    Slot::Pinned,
    Slot::Image,
    Slot::Billboard(BillboardSlot::FeedSecond),
    Slot::Podcasts,
    Slot::Posts(PostRun::UpTo(POSTS_BEFORE_THIRD_BILLBOARD)),
    Slot::Billboard(BillboardSlot::FeedThird),
    Slot::Posts(PostRun::Rest),
];

/// Indices of the posts claimed for the featured roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Claims {
    pinned: Option<usize>,
    image: Option<usize>,
    /// First pinned post outside the default view, left out of the feed
    hidden: Option<usize>,
}

/// Claim the pinned index first, then the image index excluding it.
///
/// The image candidate is the first post with a main image in source order.
/// When that is the first pinned post the image role stays empty. Outside the
/// default view the first pinned post is hidden instead of pinned.
fn claim_featured(posts: &[Post], time_frame: &TimeFrame) -> Claims {
    let first_pinned = posts.iter().position(|post| post.pinned);
    let (pinned, hidden) = if time_frame.is_default() {
        (first_pinned, None)
    } else {
        (None, first_pinned)
    };
    let image = posts
        .iter()
        .position(Post::has_main_image)
        .filter(|index| Some(*index) != first_pinned);

    Claims {
        pinned,
        image,
        hidden,
    }
}

/// Assemble the feed for one request.
pub fn assemble(
    posts: Vec<Post>,
    mut billboards: Billboards,
    mut podcasts: Option<PodcastBlock>,
    time_frame: &TimeFrame,
) -> FeedResult {
    let claims = claim_featured(&posts, time_frame);

    let capacity = posts.len() + billboards.present_count() + usize::from(podcasts.is_some());
    let mut pinned_item = None;
    let mut image_item = None;
    let mut ordinary = Vec::with_capacity(posts.len());
    for (index, post) in posts.into_iter().enumerate() {
        if claims.hidden == Some(index) {
            continue;
        } else if claims.pinned == Some(index) {
            pinned_item = Some(post);
        } else if claims.image == Some(index) {
            image_item = Some(post);
        } else {
            ordinary.push(post);
        }
    }

    let mut ordinary = ordinary.into_iter();
    let mut feed_items = Vec::with_capacity(capacity);
    for slot in FEED_LAYOUT {
        match slot {
            Slot::Billboard(slot) => {
                feed_items.extend(billboards.take(slot).map(FeedItem::Billboard));
            }
            Slot::Pinned => feed_items.extend(pinned_item.clone().map(FeedItem::Post)),
            Slot::Image => feed_items.extend(image_item.clone().map(FeedItem::Post)),
            Slot::Podcasts => feed_items.extend(podcasts.take().map(FeedItem::Podcasts)),
            Slot::Posts(PostRun::UpTo(count)) => {
                feed_items.extend(ordinary.by_ref().take(count).map(FeedItem::Post));
            }
            Slot::Posts(PostRun::Rest) => {
                feed_items.extend(ordinary.by_ref().map(FeedItem::Post));
            }
        }
    }

    FeedResult {
        feed_items,
        pinned_item,
        image_item,
    }
}
