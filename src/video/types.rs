use gl;
use gl::types::*;

/// Returns the GLSL spelling of a type enum reported by `glGetActiveUniform`,
/// `glGetProgramResourceiv` and friends.
pub fn glsl_type_name(tp: GLenum) -> &'static str {
    match tp {
        gl::FLOAT => "float",
        gl::FLOAT_VEC2 => "vec2",
        gl::FLOAT_VEC3 => "vec3",
        gl::FLOAT_VEC4 => "vec4",
        gl::DOUBLE => "double",
        gl::DOUBLE_VEC2 => "dvec2",
        gl::DOUBLE_VEC3 => "dvec3",
        gl::DOUBLE_VEC4 => "dvec4",
        gl::INT => "int",
        gl::INT_VEC2 => "ivec2",
        gl::INT_VEC3 => "ivec3",
        gl::INT_VEC4 => "ivec4",
        gl::UNSIGNED_INT => "uint",
        gl::UNSIGNED_INT_VEC2 => "uvec2",
        gl::UNSIGNED_INT_VEC3 => "uvec3",
        gl::UNSIGNED_INT_VEC4 => "uvec4",
        gl::BOOL => "bool",
        gl::BOOL_VEC2 => "bvec2",
        gl::BOOL_VEC3 => "bvec3",
        gl::BOOL_VEC4 => "bvec4",
        gl::FLOAT_MAT2 => "mat2",
        gl::FLOAT_MAT3 => "mat3",
        gl::FLOAT_MAT4 => "mat4",
        gl::FLOAT_MAT2x3 => "mat2x3",
        gl::FLOAT_MAT2x4 => "mat2x4",
        gl::FLOAT_MAT3x2 => "mat3x2",
        gl::FLOAT_MAT3x4 => "mat3x4",
        gl::FLOAT_MAT4x2 => "mat4x2",
        gl::FLOAT_MAT4x3 => "mat4x3",
        gl::DOUBLE_MAT2 => "dmat2",
        gl::DOUBLE_MAT3 => "dmat3",
        gl::DOUBLE_MAT4 => "dmat4",
        gl::DOUBLE_MAT2x3 => "dmat2x3",
        gl::DOUBLE_MAT2x4 => "dmat2x4",
        gl::DOUBLE_MAT3x2 => "dmat3x2",
        gl::DOUBLE_MAT3x4 => "dmat3x4",
        gl::DOUBLE_MAT4x2 => "dmat4x2",
        gl::DOUBLE_MAT4x3 => "dmat4x3",
        gl::SAMPLER_1D => "sampler1D",
        gl::SAMPLER_2D => "sampler2D",
        gl::SAMPLER_3D => "sampler3D",
        gl::SAMPLER_CUBE => "samplerCube",
        gl::SAMPLER_1D_SHADOW => "sampler1DShadow",
        gl::SAMPLER_2D_SHADOW => "sampler2DShadow",
        gl::SAMPLER_1D_ARRAY => "sampler1DArray",
        gl::SAMPLER_2D_ARRAY => "sampler2DArray",
        gl::SAMPLER_CUBE_MAP_ARRAY => "samplerCubeArray",
        gl::SAMPLER_1D_ARRAY_SHADOW => "sampler1DArrayShadow",
        gl::SAMPLER_2D_ARRAY_SHADOW => "sampler2DArrayShadow",
        gl::SAMPLER_2D_MULTISAMPLE => "sampler2DMS",
        gl::SAMPLER_2D_MULTISAMPLE_ARRAY => "sampler2DMSArray",
        gl::SAMPLER_CUBE_SHADOW => "samplerCubeShadow",
        gl::SAMPLER_CUBE_MAP_ARRAY_SHADOW => "samplerCubeArrayShadow",
        gl::SAMPLER_BUFFER => "samplerBuffer",
        gl::SAMPLER_2D_RECT => "sampler2DRect",
        gl::SAMPLER_2D_RECT_SHADOW => "sampler2DRectShadow",
        gl::INT_SAMPLER_1D => "isampler1D",
        gl::INT_SAMPLER_2D => "isampler2D",
        gl::INT_SAMPLER_3D => "isampler3D",
        gl::INT_SAMPLER_CUBE => "isamplerCube",
        gl::INT_SAMPLER_1D_ARRAY => "isampler1DArray",
        gl::INT_SAMPLER_2D_ARRAY => "isampler2DArray",
        gl::INT_SAMPLER_CUBE_MAP_ARRAY => "isamplerCubeArray",
        gl::INT_SAMPLER_2D_MULTISAMPLE => "isampler2DMS",
        gl::INT_SAMPLER_2D_MULTISAMPLE_ARRAY => "isampler2DMSArray",
        gl::INT_SAMPLER_BUFFER => "isamplerBuffer",
        gl::INT_SAMPLER_2D_RECT => "isampler2DRect",
        gl::UNSIGNED_INT_SAMPLER_1D => "usampler1D",
        gl::UNSIGNED_INT_SAMPLER_2D => "usampler2D",
        gl::UNSIGNED_INT_SAMPLER_3D => "usampler3D",
        gl::UNSIGNED_INT_SAMPLER_CUBE => "usamplerCube",
        gl::UNSIGNED_INT_SAMPLER_1D_ARRAY => "usampler1DArray",
        gl::UNSIGNED_INT_SAMPLER_2D_ARRAY => "usampler2DArray",
        gl::UNSIGNED_INT_SAMPLER_CUBE_MAP_ARRAY => "usamplerCubeArray",
        gl::UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE => "usampler2DMS",
        gl::UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE_ARRAY => "usampler2DMSArray",
        gl::UNSIGNED_INT_SAMPLER_BUFFER => "usamplerBuffer",
        gl::UNSIGNED_INT_SAMPLER_2D_RECT => "usampler2DRect",
        gl::IMAGE_1D => "image1D",
        gl::IMAGE_2D => "image2D",
        gl::IMAGE_3D => "image3D",
        gl::IMAGE_2D_RECT => "image2DRect",
        gl::IMAGE_CUBE => "imageCube",
        gl::IMAGE_BUFFER => "imageBuffer",
        gl::IMAGE_1D_ARRAY => "image1DArray",
        gl::IMAGE_2D_ARRAY => "image2DArray",
        gl::IMAGE_CUBE_MAP_ARRAY => "imageCubeArray",
        gl::IMAGE_2D_MULTISAMPLE => "image2DMS",
        gl::IMAGE_2D_MULTISAMPLE_ARRAY => "image2DMSArray",
        gl::INT_IMAGE_1D => "iimage1D",
        gl::INT_IMAGE_2D => "iimage2D",
        gl::INT_IMAGE_3D => "iimage3D",
        gl::INT_IMAGE_2D_RECT => "iimage2DRect",
        gl::INT_IMAGE_CUBE => "iimageCube",
        gl::INT_IMAGE_BUFFER => "iimageBuffer",
        gl::INT_IMAGE_1D_ARRAY => "iimage1DArray",
        gl::INT_IMAGE_2D_ARRAY => "iimage2DArray",
        gl::INT_IMAGE_CUBE_MAP_ARRAY => "iimageCubeArray",
        gl::INT_IMAGE_2D_MULTISAMPLE => "iimage2DMS",
        gl::INT_IMAGE_2D_MULTISAMPLE_ARRAY => "iimage2DMSArray",
        gl::UNSIGNED_INT_IMAGE_1D => "uimage1D",
        gl::UNSIGNED_INT_IMAGE_2D => "uimage2D",
        gl::UNSIGNED_INT_IMAGE_3D => "uimage3D",
        gl::UNSIGNED_INT_IMAGE_2D_RECT => "uimage2DRect",
        gl::UNSIGNED_INT_IMAGE_CUBE => "uimageCube",
        gl::UNSIGNED_INT_IMAGE_BUFFER => "uimageBuffer",
        gl::UNSIGNED_INT_IMAGE_1D_ARRAY => "uimage1DArray",
        gl::UNSIGNED_INT_IMAGE_2D_ARRAY => "uimage2DArray",
        gl::UNSIGNED_INT_IMAGE_CUBE_MAP_ARRAY => "uimageCubeArray",
        gl::UNSIGNED_INT_IMAGE_2D_MULTISAMPLE => "uimage2DMS",
        gl::UNSIGNED_INT_IMAGE_2D_MULTISAMPLE_ARRAY => "uimage2DMSArray",
        gl::UNSIGNED_INT_ATOMIC_COUNTER => "atomic_uint",
        _ => "UNKNOWN",
    }
}
