//! Picture record view: scalar fields, rectangle scan and nested records.

use tlvbox::record::{tags, Rect, RecordBuilder, RecordView};
use tlvbox::{DecodeLimits, TlvBox, TlvError};

fn sample_person(name: &str, id: &str, score: i32) -> TlvBox {
    let mut person = RecordBuilder::new();
    person
        .person_name(name)
        .unwrap()
        .person_id(id)
        .unwrap()
        .person_score(score);
    person.build()
}

#[test]
fn tag_dictionary_is_stable() {
    assert_eq!(tags::PIC_DATA, 0x01);
    assert_eq!(tags::PIXEL_FMT, 0x02);
    assert_eq!(tags::PIC_TIME, 0x03);
    assert_eq!(tags::PLAY_URL, 0x04);
    assert_eq!(tags::PLAY_ALIAS, 0x05);
    assert_eq!(tags::PLAY_CHANNEL, 0x06);
    assert_eq!(tags::PERSON_NAME, 0x10);
    assert_eq!(tags::PERSON_ID, 0x11);
    assert_eq!(tags::PERSON_SCORE, 0x12);
    assert_eq!(tags::RECT_RANGE, 0x1000..0x2000);
    assert_eq!(tags::FACE_RECOG_RANGE, 0x2001..0x3000);
}

#[test]
fn scalar_field_matrix() {
    let mut builder = RecordBuilder::new();
    builder
        .pic_data(vec![0xff, 0xd8, 0xff])
        .unwrap()
        .pixel_format("nv12")
        .unwrap()
        .pic_time("2024-01-02 03:04:05")
        .unwrap()
        .play_url("rtsp://camera/1")
        .unwrap()
        .play_alias("front door")
        .unwrap()
        .play_channel(2);

    let view = RecordView::parse(&builder.encode(), 0).unwrap();
    assert_eq!(view.pic_data(), Some(&[0xff, 0xd8, 0xff][..]));
    assert_eq!(view.pixel_format().unwrap(), Some("nv12"));
    assert_eq!(view.pic_time().unwrap(), Some("2024-01-02 03:04:05"));
    assert_eq!(view.play_url().unwrap(), Some("rtsp://camera/1"));
    assert_eq!(view.play_alias().unwrap(), Some("front door"));
    assert_eq!(view.play_channel().unwrap(), Some(2));
    assert_eq!(view.person_name().unwrap(), None);
    assert_eq!(view.person_id().unwrap(), None);
    assert_eq!(view.person_score().unwrap(), None);
}

#[test]
fn rect_scan_stops_at_first_gap() {
    let mut tlv = TlvBox::new();
    tlv.put_bytes(0x1000, Rect::new(1, 2, 3, 4).to_payload())
        .unwrap();
    tlv.put_bytes(0x1002, Rect::new(5, 6, 7, 8).to_payload())
        .unwrap();
    let view = RecordView::new(tlv);
    assert_eq!(view.rects().unwrap(), vec![Rect::new(1, 2, 3, 4)]);
}

#[test]
fn rect_scan_reads_raw_wire_layout() {
    let mut payload = Vec::new();
    for v in [10i32, -20, 30, 40] {
        payload.extend_from_slice(&v.to_le_bytes());
    }
    let mut buf = 0x1000u32.to_le_bytes().to_vec();
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&payload);

    let view = RecordView::parse(&buf, 0).unwrap();
    assert_eq!(view.rects().unwrap(), vec![Rect::new(10, -20, 30, 40)]);
}

#[test]
fn empty_rect_range_is_empty_list() {
    let mut tlv = TlvBox::new();
    tlv.put_i32(tags::PLAY_CHANNEL, 1);
    tlv.put_i32(0x2000, 1);
    let view = RecordView::new(tlv);
    assert_eq!(view.rects().unwrap(), Vec::<Rect>::new());
}

#[test]
fn short_rect_payload_is_an_error() {
    let mut tlv = TlvBox::new();
    tlv.put_bytes(0x1000, Rect::default().to_payload()).unwrap();
    tlv.put_bytes(0x1001, vec![0; 15]).unwrap();
    assert_eq!(
        RecordView::new(tlv).rects(),
        Err(TlvError::ShortPayload {
            tag: 0x1001,
            expected: 16,
            actual: 15
        })
    );
}

#[test]
fn many_rects_in_order() {
    let mut builder = RecordBuilder::new();
    let rects: Vec<Rect> = (0..50).map(|i| Rect::new(i, i * 2, i * 3, i * 4)).collect();
    for rect in &rects {
        builder.push_rect(*rect).unwrap();
    }
    let view = RecordView::parse(&builder.encode(), 0).unwrap();
    assert_eq!(view.rects().unwrap(), rects);
}

#[test]
fn nested_record_with_person_id() {
    let mut child = TlvBox::new();
    child.put_str(0x11, "person-42").unwrap();
    let mut top = TlvBox::new();
    top.put_box(0x2001, &child).unwrap();

    let view = RecordView::parse(&top.encode(), 0).unwrap();
    let children = view.recognitions().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].person_id().unwrap(), Some("person-42"));
}

#[test]
fn nested_scan_stops_at_first_gap() {
    let mut top = TlvBox::new();
    top.put_box(0x2001, &sample_person("a", "1", 10)).unwrap();
    top.put_box(0x2002, &sample_person("b", "2", 20)).unwrap();
    top.put_box(0x2004, &sample_person("d", "4", 40)).unwrap();

    let names: Vec<String> = RecordView::new(top)
        .recognitions()
        .unwrap()
        .iter()
        .map(|child| child.person_name().unwrap().unwrap_or_default().to_owned())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn tag_0x2000_is_not_part_of_either_range() {
    let mut top = TlvBox::new();
    top.put_box(0x2000, &sample_person("x", "0", 0)).unwrap();
    let view = RecordView::new(top);
    assert!(view.rects().unwrap().is_empty());
    assert!(view.recognitions().unwrap().is_empty());
}

#[test]
fn self_similar_nesting() {
    let mut grandchild = RecordBuilder::new();
    grandchild.person_name("grandchild").unwrap();
    grandchild.push_rect(Rect::new(7, 7, 7, 7)).unwrap();

    let mut child = RecordBuilder::new();
    child.person_name("child").unwrap();
    child.push_child(&grandchild.build()).unwrap();

    let mut top = RecordBuilder::new();
    top.pixel_format("jpeg").unwrap();
    top.push_rect(Rect::new(0, 0, 100, 100)).unwrap();
    top.push_child(&child.build()).unwrap();
    top.push_child(&sample_person("sibling", "s", 50)).unwrap();

    let view = RecordView::parse(&top.encode(), 0).unwrap();
    let children = view.recognitions().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].person_name().unwrap(), Some("child"));
    assert_eq!(children[1].person_score().unwrap(), Some(50));

    let grandchildren = children[0].recognitions().unwrap();
    assert_eq!(grandchildren.len(), 1);
    assert_eq!(grandchildren[0].person_name().unwrap(), Some("grandchild"));
    assert_eq!(grandchildren[0].rects().unwrap(), vec![Rect::new(7, 7, 7, 7)]);
    assert_eq!(grandchildren[0].as_box().depth(), 2);
}

#[test]
fn depth_limit_applies_to_nested_records() {
    let mut inner = TlvBox::new();
    inner.put_str(tags::PERSON_ID, "deep").unwrap();
    for _ in 0..3 {
        let mut parent = TlvBox::new();
        parent.put_box(0x2001, &inner).unwrap();
        inner = parent;
    }
    let bytes = inner.encode();

    let limits = DecodeLimits::default().with_max_depth(2);
    let view = RecordView::parse_with_limits(&bytes, 0, limits).unwrap();
    let level1 = view.recognitions().unwrap();
    let level2 = level1[0].recognitions().unwrap();
    assert_eq!(
        level2[0].recognitions(),
        Err(TlvError::DepthExceeded { limit: 2 })
    );

    let relaxed = RecordView::parse(&bytes, 0).unwrap();
    let deepest = relaxed.recognitions().unwrap()[0].recognitions().unwrap()[0]
        .recognitions()
        .unwrap();
    assert_eq!(deepest[0].person_id().unwrap(), Some("deep"));
}

#[test]
fn input_limit_caps_bytes_decoded_along_a_nesting_chain() {
    let mut inner = TlvBox::new();
    inner.put_bytes(tags::PIC_DATA, vec![0x5a; 200]).unwrap();
    for _ in 0..30 {
        let mut parent = TlvBox::new();
        parent.put_box(0x2001, &inner).unwrap();
        inner = parent;
    }
    let bytes = inner.encode();
    let n = bytes.len();

    let tight = DecodeLimits::default().with_max_input_len(n);
    let view = RecordView::parse_with_limits(&bytes, 0, tight).unwrap();
    assert_eq!(
        view.recognitions(),
        Err(TlvError::AggregateTooLarge {
            total: n + (n - 8),
            limit: n
        })
    );

    let doubled = DecodeLimits::default().with_max_input_len(2 * n);
    let view = RecordView::parse_with_limits(&bytes, 0, doubled).unwrap();
    let level1 = view.recognitions().unwrap();
    assert_eq!(level1.len(), 1);
    assert_eq!(
        level1[0].recognitions(),
        Err(TlvError::AggregateTooLarge {
            total: n + (n - 8) + (n - 16),
            limit: 2 * n
        })
    );
    assert!(level1[0].dump().contains("recognizes: <error: nested decode"));

    let relaxed = RecordView::parse(&bytes, 0).unwrap();
    let mut level = relaxed;
    for _ in 0..30 {
        level = level.recognitions().unwrap().remove(0);
    }
    assert_eq!(level.pic_data().map(<[u8]>::len), Some(200));
}

#[test]
fn parse_with_offset_and_box_access() {
    let mut builder = RecordBuilder::new();
    builder.play_channel(9);
    let mut buf = vec![0xAA; 4];
    buf.extend(builder.encode());

    let view = RecordView::parse(&buf, 4).unwrap();
    assert_eq!(view.play_channel().unwrap(), Some(9));
    let tlv = view.clone().into_box();
    assert_eq!(RecordView::from(tlv), view);
}

#[test]
fn parse_rejects_truncated_input() {
    let mut builder = RecordBuilder::new();
    builder.play_url("rtsp://x").unwrap();
    let bytes = builder.encode();
    assert!(matches!(
        RecordView::parse(&bytes[..bytes.len() - 1], 0),
        Err(TlvError::TruncatedPayload { tag: 0x04, .. })
    ));
}
