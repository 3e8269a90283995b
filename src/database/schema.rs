/// DDL for every table the quiz feature owns. Safe to run repeatedly.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS user_profile (
    id UUID PRIMARY KEY NOT NULL,
    full_name TEXT,
    avatar_url TEXT,
    email TEXT,
    contact_no TEXT,
    bio_description TEXT,
    created_at TIMESTAMPTZ DEFAULT now()
);

CREATE TABLE IF NOT EXISTS glosses (
    id BIGSERIAL PRIMARY KEY NOT NULL,
    gloss_name TEXT NOT NULL,
    image_url TEXT,
    gloss_descr TEXT,
    gloss_tags TEXT[],
    created_at TIMESTAMPTZ DEFAULT now()
);

CREATE TABLE IF NOT EXISTS quiz (
    id UUID PRIMARY KEY NOT NULL DEFAULT gen_random_uuid(),
    title TEXT NOT NULL,
    description TEXT,
    difficulty TEXT,
    created_by UUID CONSTRAINT quiz_created_by_fkey REFERENCES user_profile (id),
    content JSONB NOT NULL,
    created_at TIMESTAMPTZ DEFAULT now()
);

CREATE TABLE IF NOT EXISTS user_group (
    id UUID PRIMARY KEY NOT NULL DEFAULT gen_random_uuid(),
    name TEXT NOT NULL,
    description TEXT,
    invite_code TEXT NOT NULL CONSTRAINT user_group_invite_code_key UNIQUE,
    created_by UUID CONSTRAINT user_group_created_by_fkey REFERENCES user_profile (id),
    is_default BOOLEAN DEFAULT false,
    created_at TIMESTAMPTZ DEFAULT now()
);

CREATE TABLE IF NOT EXISTS quiz_attempt (
    id UUID PRIMARY KEY NOT NULL DEFAULT gen_random_uuid(),
    quiz_id UUID CONSTRAINT quiz_attempt_quiz_id_fkey REFERENCES quiz (id) ON DELETE CASCADE,
    user_id UUID CONSTRAINT quiz_attempt_user_id_fkey REFERENCES user_profile (id) ON DELETE CASCADE,
    group_id UUID CONSTRAINT quiz_attempt_group_id_fkey REFERENCES user_group (id),
    started_at TIMESTAMPTZ DEFAULT now(),
    completed_at TIMESTAMPTZ,
    total_score NUMERIC,
    response JSONB
);

CREATE TABLE IF NOT EXISTS group_member (
    group_id UUID NOT NULL CONSTRAINT group_member_group_id_fkey REFERENCES user_group (id) ON DELETE CASCADE,
    user_id UUID NOT NULL CONSTRAINT group_member_user_id_fkey REFERENCES user_profile (id) ON DELETE CASCADE,
    role TEXT DEFAULT 'member',
    joined_at TIMESTAMPTZ DEFAULT now(),
    CONSTRAINT group_member_pkey PRIMARY KEY (group_id, user_id)
);
"#;

/// Tables in creation order.
pub const TABLES: [&str; 6] = [
    "user_profile",
    "glosses",
    "quiz",
    "user_group",
    "quiz_attempt",
    "group_member",
];
