use crate::error::Result;
use crate::limits::DecodeLimits;
use crate::record::rect::Rect;
use crate::record::tags;
use crate::tlv_box::TlvBox;

/// Read-only view of a picture record.
///
/// Scalar fields map to single tags. Rectangles and face recognition results
/// are repeated fields stored on contiguous tag ranges and read with a
/// gap-stop scan. Each recognition result is itself a full record.
///
/// ```
/// use tlvbox::record::{RecordBuilder, RecordView, Rect};
///
/// let mut person = RecordBuilder::new();
/// person.person_id("p-17").unwrap().person_score(93);
///
/// let mut builder = RecordBuilder::new();
/// builder.pixel_format("jpeg").unwrap();
/// builder.push_rect(Rect::new(10, 20, 64, 64)).unwrap();
/// builder.push_child(&person.build()).unwrap();
///
/// let view = RecordView::parse(&builder.encode(), 0).unwrap();
/// assert_eq!(view.pixel_format().unwrap(), Some("jpeg"));
/// assert_eq!(view.rects().unwrap(), vec![Rect::new(10, 20, 64, 64)]);
/// assert_eq!(view.recognitions().unwrap()[0].person_id().unwrap(), Some("p-17"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordView {
    tlv: TlvBox,
}

impl RecordView {
    pub fn new(tlv: TlvBox) -> Self {
        Self { tlv }
    }

    /// Decodes `buffer[offset..]` under default [`DecodeLimits`].
    pub fn parse(buffer: &[u8], offset: usize) -> Result<Self> {
        TlvBox::from_bytes(buffer, offset).map(Self::new)
    }

    pub fn parse_with_limits(buffer: &[u8], offset: usize, limits: DecodeLimits) -> Result<Self> {
        TlvBox::from_bytes_with_limits(buffer, offset, limits).map(Self::new)
    }

    pub fn as_box(&self) -> &TlvBox {
        &self.tlv
    }

    pub fn into_box(self) -> TlvBox {
        self.tlv
    }

    pub fn pic_data(&self) -> Option<&[u8]> {
        self.tlv.get_bytes(tags::PIC_DATA)
    }

    pub fn pixel_format(&self) -> Result<Option<&str>> {
        self.tlv.get_str(tags::PIXEL_FMT)
    }

    pub fn pic_time(&self) -> Result<Option<&str>> {
        self.tlv.get_str(tags::PIC_TIME)
    }

    pub fn play_url(&self) -> Result<Option<&str>> {
        self.tlv.get_str(tags::PLAY_URL)
    }

    pub fn play_alias(&self) -> Result<Option<&str>> {
        self.tlv.get_str(tags::PLAY_ALIAS)
    }

    pub fn play_channel(&self) -> Result<Option<i32>> {
        self.tlv.get_i32(tags::PLAY_CHANNEL)
    }

    pub fn person_name(&self) -> Result<Option<&str>> {
        self.tlv.get_str(tags::PERSON_NAME)
    }

    pub fn person_id(&self) -> Result<Option<&str>> {
        self.tlv.get_str(tags::PERSON_ID)
    }

    pub fn person_score(&self) -> Result<Option<i32>> {
        self.tlv.get_i32(tags::PERSON_SCORE)
    }

    /// Rectangle stored at a single `tag`.
    pub fn rect(&self, tag: u32) -> Result<Option<Rect>> {
        self.tlv
            .get_bytes(tag)
            .map(|payload| Rect::from_payload(tag, payload))
            .transpose()
    }

    /// Rectangles from the leading gap-free run of [`tags::RECT_RANGE`].
    ///
    /// A payload shorter than 16 bytes fails the whole read.
    pub fn rects(&self) -> Result<Vec<Rect>> {
        self.tlv
            .scan(tags::RECT_RANGE)
            .map(|(tag, payload)| Rect::from_payload(tag, payload))
            .collect()
    }

    /// Nested records from the leading gap-free run of
    /// [`tags::FACE_RECOG_RANGE`].
    ///
    /// Each child is decoded one level deeper than this record and fails the
    /// read if malformed or too deep.
    pub fn recognitions(&self) -> Result<Vec<RecordView>> {
        self.tlv
            .scan(tags::FACE_RECOG_RANGE)
            .map(|(_, payload)| self.tlv.nested(payload).map(Self::new))
            .collect()
    }
}

impl From<TlvBox> for RecordView {
    fn from(tlv: TlvBox) -> Self {
        Self::new(tlv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TlvError;

    #[test]
    fn absent_fields_are_none() {
        let view = RecordView::default();
        assert_eq!(view.pic_data(), None);
        assert_eq!(view.play_channel().unwrap(), None);
        assert_eq!(view.person_name().unwrap(), None);
        assert!(view.rects().unwrap().is_empty());
        assert!(view.recognitions().unwrap().is_empty());
    }

    #[test]
    fn zero_is_not_absent() {
        let mut tlv = TlvBox::new();
        tlv.put_i32(tags::PLAY_CHANNEL, 0);
        tlv.put_str(tags::PERSON_NAME, "").unwrap();
        let view = RecordView::new(tlv);
        assert_eq!(view.play_channel().unwrap(), Some(0));
        assert_eq!(view.person_name().unwrap(), Some(""));
    }

    #[test]
    fn single_rect_lookup_outside_scan() {
        let mut tlv = TlvBox::new();
        tlv.put_bytes(0x1005, Rect::new(1, 2, 3, 4).to_payload())
            .unwrap();
        let view = RecordView::new(tlv);
        assert!(view.rects().unwrap().is_empty());
        assert_eq!(view.rect(0x1005).unwrap(), Some(Rect::new(1, 2, 3, 4)));
        assert_eq!(view.rect(0x1006).unwrap(), None);
    }

    #[test]
    fn malformed_child_fails_the_scan() {
        let mut tlv = TlvBox::new();
        tlv.put_bytes(0x2001, vec![0x11, 0, 0]).unwrap();
        let view = RecordView::new(tlv);
        assert!(matches!(
            view.recognitions(),
            Err(TlvError::TruncatedHeader { .. })
        ));
    }

    #[test]
    fn child_depth_is_bounded() {
        let mut leaf = TlvBox::new();
        leaf.put_str(tags::PERSON_ID, "leaf").unwrap();
        let mut middle = TlvBox::new();
        middle.put_box(0x2001, &leaf).unwrap();
        let mut top = TlvBox::new();
        top.put_box(0x2001, &middle).unwrap();

        let limits = DecodeLimits::default().with_max_depth(1);
        let view = RecordView::parse_with_limits(&top.encode(), 0, limits).unwrap();
        let children = view.recognitions().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(
            children[0].recognitions(),
            Err(TlvError::DepthExceeded { limit: 1 })
        );
    }
}
