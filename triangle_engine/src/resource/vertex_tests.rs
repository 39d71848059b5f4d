/// Unit tests for vertex data and layout

use glam::{Vec2, Vec3};
use crate::error::Error;
use crate::resource::vertex::*;

// ============================================================================
// VERTEX BUFFER
// ============================================================================

#[test]
fn test_triangle_floats_in_upload_order() {
    let buffer = VertexBuffer::triangle();

    assert_eq!(
        buffer.as_floats(),
        &[
            0.5, 0.0, 1.0, 0.0, 0.0,
            0.0, 0.5, 0.0, 1.0, 0.0,
            -0.5, 0.0, 0.0, 0.0, 1.0,
        ]
    );
    assert_eq!(buffer.float_len(), 15);
    assert_eq!(buffer.byte_len(), 60);
    assert_eq!(buffer.vertex_count(), 3);
}

#[test]
fn test_vertex_record_size() {
    assert_eq!(std::mem::size_of::<Vertex>(), VERTEX_STRIDE as usize);
    assert_eq!(VERTEX_STRIDE, 20);
    assert_eq!(FLOATS_PER_VERTEX, 5);
}

#[test]
fn test_dirty_flag() {
    let mut buffer = VertexBuffer::triangle();
    assert!(buffer.is_dirty());

    buffer.mark_uploaded();
    assert!(!buffer.is_dirty());

    buffer.set_vertices(vec![Vertex::new(Vec2::ZERO, Vec3::ONE)]);
    assert!(buffer.is_dirty());
    assert_eq!(buffer.as_floats(), &[0.0, 0.0, 1.0, 1.0, 1.0]);
}

// ============================================================================
// LAYOUT
// ============================================================================

#[test]
fn test_triangle_layout() {
    let layout = VertexLayout::triangle();

    let position = layout.attribute("a_Position").unwrap();
    assert_eq!((position.components, position.offset, position.stride), (2, 0, 20));

    let color = layout.attribute("a_Color").unwrap();
    assert_eq!((color.components, color.offset, color.stride), (3, 8, 20));

    assert_eq!(layout.stride(), FLOATS_PER_VERTEX as i32 * 4);
    assert!(layout.validate(&VertexBuffer::triangle()).is_ok());
}

#[test]
fn test_draw_count_is_length_over_five() {
    let layout = VertexLayout::triangle();
    assert_eq!(layout.vertex_count(&VertexBuffer::triangle()), 3);
    assert_eq!(layout.vertex_count(&VertexBuffer::new(Vec::new())), 0);
    assert_eq!(VertexLayout::new(Vec::new()).vertex_count(&VertexBuffer::triangle()), 0);
}

#[test]
fn test_draw_count_for_sub_float_stride_is_zero() {
    for stride in 1..4 {
        let layout = VertexLayout::new(vec![AttributeBinding::new("a_Position", 1, 0, stride)]);
        assert!(layout.validate(&VertexBuffer::triangle()).is_err());
        assert_eq!(layout.vertex_count(&VertexBuffer::triangle()), 0);
    }
}

#[test]
fn test_overlapping_attributes_are_rejected() {
    let layout = VertexLayout::new(vec![
        AttributeBinding::new("a_Position", 2, 0, 20),
        AttributeBinding::new("a_Color", 3, 4, 20),
    ]);

    let err = layout.validate(&VertexBuffer::triangle()).unwrap_err();
    assert!(matches!(err, Error::InvalidResource(ref msg) if msg.contains("overlap")));
}

#[test]
fn test_attribute_past_record_end_is_rejected() {
    let layout = VertexLayout::new(vec![AttributeBinding::new("a_Color", 3, 12, 20)]);

    let err = layout.validate(&VertexBuffer::triangle()).unwrap_err();
    assert!(matches!(err, Error::InvalidResource(ref msg) if msg.contains("outside")));
}

#[test]
fn test_stride_must_match_buffer_length() {
    let layout = VertexLayout::new(vec![
        AttributeBinding::new("a_Position", 2, 0, 24),
        AttributeBinding::new("a_Color", 3, 8, 24),
    ]);

    let err = layout.validate(&VertexBuffer::triangle()).unwrap_err();
    assert!(matches!(err, Error::InvalidResource(ref msg) if msg.contains("60 bytes")));
}

#[test]
fn test_mixed_strides_and_bad_components_are_rejected() {
    let buffer = VertexBuffer::triangle();

    let mixed = VertexLayout::new(vec![
        AttributeBinding::new("a_Position", 2, 0, 20),
        AttributeBinding::new("a_Color", 3, 8, 16),
    ]);
    assert!(mixed.validate(&buffer).is_err());

    let wide = VertexLayout::new(vec![AttributeBinding::new("a_Position", 5, 0, 20)]);
    assert!(wide.validate(&buffer).is_err());

    let empty = VertexLayout::new(Vec::new());
    assert!(empty.validate(&buffer).is_err());
}

#[test]
fn test_duplicate_attribute_is_rejected() {
    let layout = VertexLayout::new(vec![
        AttributeBinding::new("a_Position", 2, 0, 20),
        AttributeBinding::new("a_Position", 2, 8, 20),
    ]);

    let err = layout.validate(&VertexBuffer::triangle()).unwrap_err();
    assert!(matches!(err, Error::InvalidResource(ref msg) if msg.contains("twice")));
}
