//! Batch extraction.

use postdex_content::markdown::TextFieldOverrides;
use postdex_content::{BatchReport, Extractor};

use crate::common::{BASE_URL, FRONT_MATTER_POST, MALFORMED_POST, NO_DATA_POST, url};

#[test]
fn test_batch_keeps_order_and_counts() {
    let extractor = Extractor::front_matter(BASE_URL, TextFieldOverrides::new());
    let posts = vec![
        ("sample".to_string(), FRONT_MATTER_POST.to_string()),
        ("broken".to_string(), MALFORMED_POST.to_string()),
        ("no-data".to_string(), NO_DATA_POST.to_string()),
    ];

    let (results, report) = extractor.parse_batch(posts);

    assert_eq!(
        report,
        BatchReport {
            documents: 2,
            failures: 1
        }
    );
    assert_eq!(results[0].as_ref().unwrap().url(), url("sample"));
    assert!(results[1].as_ref().unwrap_err().is_malformed_markup());
    assert_eq!(results[2].as_ref().unwrap().url(), url("no-data"));
}

#[test]
fn test_extractor_shared_across_threads() {
    let extractor = Extractor::front_matter(BASE_URL, TextFieldOverrides::new());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let extractor = &extractor;
                scope.spawn(move || {
                    extractor
                        .parse(FRONT_MATTER_POST, &format!("post-{i}"))
                        .unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let doc = handle.join().unwrap();
            assert_eq!(doc.url(), url(&format!("post-{i}")));
            assert_eq!(doc.sections().len(), 2);
        }
    });
}
