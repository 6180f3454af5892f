use super::*;

#[test]
fn fixed_rounds_and_keeps_sign_of_tiny_negatives() {
    assert_eq!(fixed(0.75, 4), "0.7500");
    assert_eq!(fixed(-26.666_62, 4), "-26.6666");
    assert_eq!(fixed(0.0, 4), "0.0000");
    assert_eq!(fixed(-0.000_01, 4), "-0.0000");
    assert_eq!(fixed(-0.000_064_2, 4), "-0.0001");
    assert_eq!(fixed(2.0, 2), "2.00");
}

#[test]
fn enable_and_mask_enable_keep_their_closing_styles() {
    let l = LayerIndex::new(2).unwrap();
    let mut w = CommandWriter::new();
    w.enable(0, l, true);
    w.mask_enable(1, l, false);
    assert_eq!(
        w.finish(),
        "<Op id=\"SuperSourceV2BoxEnable\" superSource=\"0\" boxIndex=\"2\" enable=\"True\" />\n\
         <Op id=\"SuperSourceV2BoxMaskEnable\" superSource=\"1\" boxIndex=\"2\" enable=\"False\"/>"
    );
}

#[test]
fn geometry_and_crop_lines() {
    let mut s = BoxState::new(LayerIndex::new(1).unwrap());
    s.scale = 0.7;
    s.x = -5.333_220_163_981_12;
    s.y = 3.0;
    let mut w = CommandWriter::new();
    w.geometry(&s);
    w.crop(
        0,
        s.layer(),
        &MaskRect {
            left: 9.0,
            top: 0.126,
            right: 9.0,
            bottom: 1.0 / 3.0,
        },
    );
    let out = w.finish();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            r#"<Op id="SuperSourceV2BoxSize" superSource="0" boxIndex="1" size="0.7000"/>"#,
            r#"<Op id="SuperSourceV2BoxXPosition" superSource="0" boxIndex="1" xPosition="-5.3332"/>"#,
            r#"<Op id="SuperSourceV2BoxYPosition" superSource="0" boxIndex="1" yPosition="3.0000"/>"#,
            r#"<Op id="SuperSourceV2BoxMaskLeft" superSource="0" boxIndex="1" left="9.00"/>"#,
            r#"<Op id="SuperSourceV2BoxMaskTop" superSource="0" boxIndex="1" top="0.13"/>"#,
            r#"<Op id="SuperSourceV2BoxMaskRight" superSource="0" boxIndex="1" right="9.00"/>"#,
            r#"<Op id="SuperSourceV2BoxMaskBottom" superSource="0" boxIndex="1" bottom="0.33"/>"#,
        ]
    );
}

#[test]
fn comment_blank_and_sleep() {
    let mut w = CommandWriter::new();
    w.comment("Final States");
    w.blank();
    w.sleep();
    assert_eq!(
        w.finish(),
        "<!-- Final States -->\n\n<Op id=\"MacroSleep\" frames=\"1\"/>"
    );
}
