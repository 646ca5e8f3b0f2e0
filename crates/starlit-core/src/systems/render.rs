use crate::components::entity::Entity;
use crate::components::sprite::BlendMode;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
///
/// Entities are ordered back-to-front by render layer, then grouped by blend
/// mode: all alpha-blended instances first, additive after `blend_split`.
/// Additive instances draw over everything in their pass, which is what the
/// overlay-ish glow sprites want anyway.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    let mut alpha_instances: Vec<(u8, RenderInstance)> = Vec::new();
    let mut additive_instances: Vec<(u8, RenderInstance)> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let sprite = match &entity.sprite {
            Some(s) => s,
            None => continue,
        };

        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            scale: entity.scale.x,
            sprite_col: sprite.col,
            alpha: sprite.alpha,
            cell_span: sprite.cell_span,
            atlas_row: sprite.row,
        };

        match sprite.blend {
            BlendMode::Alpha => alpha_instances.push((entity.layer.as_u8(), instance)),
            BlendMode::Additive => additive_instances.push((entity.layer.as_u8(), instance)),
        }
    }

    alpha_instances.sort_by_key(|(layer, _)| *layer);
    additive_instances.sort_by_key(|(layer, _)| *layer);

    let split = alpha_instances.len() as u32;
    for (_, inst) in alpha_instances {
        buffer.push(inst);
    }
    buffer.set_blend_split(split);
    for (_, inst) in additive_instances {
        buffer.push(inst);
    }
}
